use std::sync::Arc;
use tracing::{error, info};
use crate::actor_framework::ResourceActor;
use crate::clients::{UserClient, UserService};
use crate::domain::{User, UserId};
use super::AppError;

/// Owns the user actor task and hands out clients to it.
///
/// The actor stops once every client handle is dropped; `shutdown` drops
/// the system's own handle and waits for that to happen.
pub struct DirectorySystem {
    pub user_client: UserClient,
    handle: tokio::task::JoinHandle<()>,
}

impl DirectorySystem {
    pub fn new(channel_capacity: usize) -> Self {
        let mut next_user_id: UserId = 0;
        let next_id = move || {
            next_user_id += 1;
            next_user_id
        };

        let (user_actor, user_resource_client) = ResourceActor::<User>::new(channel_capacity, next_id);
        let user_client = UserClient::new(user_resource_client);
        let handle = tokio::spawn(user_actor.run());
        info!(channel_capacity, "User directory started");

        Self { user_client, handle }
    }

    /// A type-erased handle for layers that only need the service contract.
    pub fn service(&self) -> Arc<dyn UserService> {
        Arc::new(self.user_client.clone())
    }

    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down user directory...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(AppError::Shutdown(e));
        }

        info!("User directory shutdown complete.");
        Ok(())
    }
}
