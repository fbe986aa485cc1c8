//! Client handles over the resource actors, and the capability trait the
//! HTTP layer is written against.

mod user_client;

pub use user_client::*;

use async_trait::async_trait;
use crate::domain::{NewUser, User, UserId};
use crate::user_actor::UserError;

/// CRUD contract for the user directory.
///
/// Every failing call leaves the directory unchanged.
#[async_trait]
pub trait UserService: Send + Sync {
    /// All stored users in ascending id order.
    async fn get_all_users(&self) -> Result<Vec<User>, UserError>;

    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserError>;

    /// Store `user` under its own id; fails with `DuplicateId` if taken.
    async fn add_user(&self, user: User) -> Result<User, UserError>;

    /// Store a new user, allocating an id when the payload has none.
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserError>;

    async fn remove_user(&self, id: UserId) -> Result<(), UserError>;

    /// Replace the record stored under `id`; the stored record keeps `id`.
    async fn update_user(&self, id: UserId, user: User) -> Result<User, UserError>;
}
