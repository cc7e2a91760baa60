//! Fixed database and collection identifiers.

use std::time::Duration;

/// Database holding the user collection.
pub const DATABASE_NAME: &str = "user_store";

/// Collection storing user documents.
pub const COLLECTION_USERS: &str = "users";

/// Database the liveness ping is issued against.
pub const ADMIN_DATABASE: &str = "admin";

/// Upper bound on how long `check_connection` waits for the ping.
pub const CONNECTION_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Application name reported to the server in the handshake.
pub const APP_NAME: &str = "user-store";
