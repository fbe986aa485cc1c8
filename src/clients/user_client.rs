use async_trait::async_trait;
use tracing::{debug, instrument};
use crate::actor_framework::ResourceClient;
use crate::clients::UserService;
use crate::domain::{NewUser, User, UserId};
use crate::user_actor::UserError;

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl UserService for UserClient {
    #[instrument(skip(self))]
    async fn get_all_users(&self) -> Result<Vec<User>, UserError> {
        debug!("Sending request");
        self.inner.list().await.map_err(|e| UserError::ActorCommunicationError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn get_user_by_id(&self, id: UserId) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(|e| UserError::from_framework(id, e))
    }

    #[instrument(skip(self, user), fields(user_id = user.id))]
    async fn add_user(&self, user: User) -> Result<User, UserError> {
        debug!("Sending request");
        let id = user.id;
        self.inner.insert(user).await.map_err(|e| UserError::from_framework(id, e))
    }

    #[instrument(skip(self, new_user), fields(requested_id = ?new_user.id))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserError> {
        match new_user.into_parts() {
            (Some(_), user) => self.add_user(user).await,
            (None, user) => {
                debug!("Sending request");
                let placeholder = user.id;
                self.inner.create(user).await.map_err(|e| UserError::from_framework(placeholder, e))
            }
        }
    }

    #[instrument(skip(self))]
    async fn remove_user(&self, id: UserId) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(|e| UserError::from_framework(id, e))
    }

    #[instrument(skip(self, user))]
    async fn update_user(&self, id: UserId, user: User) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.replace(id, user).await.map_err(|e| UserError::from_framework(id, e))
    }
}
