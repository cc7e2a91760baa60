//! Success message constants used throughout the application.

// Health messages
pub const MSG_SERVER_HEALTHY: &str = "Server is running and storage is reachable";
pub const MSG_SERVER_DEGRADED: &str = "Server is running but storage is unreachable";

// User management messages
pub const MSG_USER_CREATED: &str = "User created successfully";
pub const MSG_USERS_FOUND: &str = "Users retrieved";
pub const MSG_USER_UPDATED: &str = "User updated successfully";
pub const MSG_USER_UNCHANGED: &str = "Field already holds that value";
pub const MSG_USER_DELETED: &str = "User deleted successfully";
pub const MSG_USERS_DELETED: &str = "All users deleted";
