//! User repository for all MongoDB operations related to users.
//!
//! Every public method issues exactly one request against the `users`
//! collection (or one ping for [`UserRepository::check_connection`]). Nothing
//! is cached and nothing is retried; driver failures surface as
//! [`RepositoryError::Database`].

use std::future::IntoFuture;

use futures::TryStreamExt;
use log::{debug, info, warn};
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use crate::constants::{
    ADMIN_DATABASE, APP_NAME, COLLECTION_USERS, CONNECTION_CHECK_TIMEOUT, DATABASE_NAME,
};
use crate::errors::{RepositoryError, Result};
use crate::models::User;
use crate::validators::{validate_field_name, validate_field_value, validate_update_field};

/// Outcome of [`UserRepository::set_field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldUpdate {
    /// A user with the id exists.
    pub matched: bool,
    /// The stored value changed.
    pub modified: bool,
}

/// Repository for user-related database operations.
#[derive(Clone, Debug)]
pub struct UserRepository {
    client: Client,
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new UserRepository for the given connection string.
    ///
    /// Accepts a full `mongodb://` URI or a bare `host:port`. No request is
    /// sent to the server here, so an unreachable server does not make
    /// construction fail; a malformed connection string does.
    ///
    /// A `mongodb+srv://` URI is the exception: parsing it resolves the SRV
    /// and TXT records, so construction fails when DNS cannot answer.
    pub async fn new(connection_string: &str) -> Result<Self> {
        let uri = normalize_connection_string(connection_string);
        let mut options = ClientOptions::parse(&uri).await?;
        options.app_name = Some(APP_NAME.to_string());

        let client = Client::with_options(options)?;
        let collection = client.database(DATABASE_NAME).collection(COLLECTION_USERS);
        debug!(
            "Repository: Opened collection {}.{}",
            DATABASE_NAME, COLLECTION_USERS
        );

        Ok(Self { client, collection })
    }

    /// Ping the server, waiting at most [`CONNECTION_CHECK_TIMEOUT`].
    ///
    /// Never fails: any error or an expired deadline yields `false`.
    pub async fn check_connection(&self) -> bool {
        let admin = self.client.database(ADMIN_DATABASE);
        let ping = admin.run_command(doc! { "ping": 1 }).into_future();

        match tokio::time::timeout(CONNECTION_CHECK_TIMEOUT, ping).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                warn!("Repository: Ping failed: {}", e);
                false
            }
            Err(_) => {
                warn!(
                    "Repository: Ping timed out after {:?}",
                    CONNECTION_CHECK_TIMEOUT
                );
                false
            }
        }
    }

    /// Insert a new user. When `user.id` is unset, the id assigned by the
    /// storage layer is written back into `user`.
    pub async fn insert_user(&self, user: &mut User) -> Result<()> {
        let result = self.collection.insert_one(&*user).await?;

        if user.id.is_none() {
            let id = result
                .inserted_id
                .as_object_id()
                .ok_or(RepositoryError::MissingInsertedId)?;
            user.id = Some(id);
        }

        info!("Repository: Inserted user {:?}", user.id);
        Ok(())
    }

    /// Fetch every stored user in storage order.
    pub async fn get_all_users(&self) -> Result<Vec<User>> {
        debug!("Repository: Finding all users");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch users whose `field_name` equals `value`.
    ///
    /// The value is matched against each native type it can denote, so
    /// `"30"` finds a user whose stored `age` is the integer 30.
    pub async fn get_users_by_field(&self, field_name: &str, value: &str) -> Result<Vec<User>> {
        let filter = field_filter(field_name, value)?;
        debug!("Repository: Finding users with filter: {:?}", filter);

        let cursor = self.collection.find(filter).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Fetch at most `limit` users after skipping `skip` of them.
    pub async fn get_users(&self, skip: u64, limit: u64) -> Result<Vec<User>> {
        // The driver reads a zero limit as "no limit".
        if limit == 0 {
            return Ok(Vec::new());
        }

        debug!("Repository: Finding users (skip {}, limit {})", skip, limit);
        let cursor = self
            .collection
            .find(doc! {})
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;

        Ok(cursor.try_collect().await?)
    }

    /// Set `field_name` to `new_value` on the user with `id`, adding the
    /// field when absent.
    ///
    /// Returns `true` iff exactly one document was modified.
    pub async fn update_user(
        &self,
        id: &ObjectId,
        field_name: &str,
        new_value: impl Into<Bson>,
    ) -> Result<bool> {
        Ok(self.set_field(id, field_name, new_value).await?.modified)
    }

    /// Same request as [`update_user`](Self::update_user), reporting whether
    /// the id matched separately from whether anything changed.
    ///
    /// Values for the typed fields (`name`, `blog`, `location`, `age`) must
    /// have the type [`User`] reads back, otherwise the request is rejected
    /// before it is sent.
    pub async fn set_field(
        &self,
        id: &ObjectId,
        field_name: &str,
        new_value: impl Into<Bson>,
    ) -> Result<FieldUpdate> {
        let update = set_update(field_name, new_value.into())?;
        debug!("Repository: Updating user {} with {:?}", id, update);

        let result = self
            .collection
            .update_one(doc! { "_id": *id }, update)
            .await?;

        let outcome = FieldUpdate {
            matched: result.matched_count == 1,
            modified: result.modified_count == 1,
        };
        if outcome.modified {
            info!("Repository: Updated field '{}' of user {}", field_name, id);
        }
        Ok(outcome)
    }

    /// Delete the user with `id`. Returns `true` iff a document was removed.
    pub async fn delete_user_by_id(&self, id: &ObjectId) -> Result<bool> {
        debug!("Repository: Deleting user {}", id);
        let result = self.collection.delete_one(doc! { "_id": *id }).await?;

        let deleted = result.deleted_count == 1;
        if deleted {
            info!("Repository: Deleted user {}", id);
        }
        Ok(deleted)
    }

    /// Delete every user and return how many were removed.
    pub async fn delete_all_users(&self) -> Result<u64> {
        let result = self.collection.delete_many(doc! {}).await?;
        info!("Repository: Deleted {} users", result.deleted_count);
        Ok(result.deleted_count)
    }
}

/// Prefix a bare `host:port` with the `mongodb://` scheme.
fn normalize_connection_string(connection_string: &str) -> String {
    let trimmed = connection_string.trim();
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("mongodb://{}", trimmed)
    }
}

/// Every BSON value a query string may stand for.
fn value_candidates(value: &str) -> Vec<Bson> {
    let mut candidates = vec![Bson::String(value.to_string())];

    if let Ok(int) = value.parse::<i64>() {
        candidates.push(Bson::Int64(int));
    } else if let Ok(float) = value.parse::<f64>() {
        if float.is_finite() {
            candidates.push(Bson::Double(float));
        }
    }

    if let Ok(oid) = ObjectId::parse_str(value) {
        candidates.push(Bson::ObjectId(oid));
    }

    match value {
        "true" => candidates.push(Bson::Boolean(true)),
        "false" => candidates.push(Bson::Boolean(false)),
        _ => {}
    }

    candidates
}

/// Equality filter on `field_name` for a string-typed `value`.
fn field_filter(field_name: &str, value: &str) -> Result<Document> {
    validate_field_name(field_name)?;

    let mut candidates = value_candidates(value);
    let condition = if candidates.len() == 1 {
        candidates.remove(0)
    } else {
        Bson::Document(doc! { "$in": candidates })
    };

    let mut filter = Document::new();
    filter.insert(field_name, condition);
    Ok(filter)
}

/// `$set` document writing `value` into `field_name`.
fn set_update(field_name: &str, value: Bson) -> Result<Document> {
    validate_update_field(field_name)?;
    let value = validate_field_value(field_name, value)?;

    let mut fields = Document::new();
    fields.insert(field_name, value);
    Ok(doc! { "$set": fields })
}
