//! Test doubles for `ResourceClient`.
//!
//! A mock client talks to a channel owned by the test, which plays the actor:
//! it pulls each request with an `expect_*` helper, checks it, then answers
//! (or drops the responder) to drive `UserClient` through its error mapping.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// A client whose requests land on the returned receiver.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Insert request
pub async fn expect_insert<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request
pub async fn expect_replace<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Replace { id, item, respond_to }) => Some((id, item, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{UserClient, UserService};
    use crate::domain::{NewUser, User};
    use crate::user_actor::UserError;

    #[tokio::test]
    async fn test_create_without_id_sends_create() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(client);

        let create_task = tokio::spawn(async move {
            let new_user = NewUser {
                id: None,
                name: "Test".to_string(),
                last_name: String::new(),
                email: "test@example.com".to_string(),
            };
            client.create_user(new_user).await
        });

        let (mut item, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(item.name, "Test");
        item.id = 1;
        responder.send(Ok(item.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(item));
    }

    #[tokio::test]
    async fn test_create_with_id_sends_insert() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(client);

        let create_task = tokio::spawn(async move {
            let new_user = NewUser {
                id: Some(42),
                name: "Test".to_string(),
                last_name: String::new(),
                email: "test@example.com".to_string(),
            };
            client.create_user(new_user).await
        });

        let (item, responder) = expect_insert(&mut receiver).await.expect("Expected Insert request");
        assert_eq!(item.id, 42);
        responder.send(Err(FrameworkError::DuplicateId("42".to_string()))).unwrap();

        assert_eq!(create_task.await.unwrap(), Err(UserError::DuplicateId(42)));
    }

    #[tokio::test]
    async fn test_rejected_replace_maps_to_validation() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(client);

        let update_task = tokio::spawn(async move {
            client.update_user(7, User::new(0, "Ann", "bad")).await
        });

        let (id, _item, responder) = expect_replace(&mut receiver).await.expect("Expected Replace request");
        assert_eq!(id, 7);
        responder.send(Err(FrameworkError::Rejected("Invalid email format".to_string()))).unwrap();

        assert_eq!(
            update_task.await.unwrap(),
            Err(UserError::ValidationError("Invalid email format".to_string()))
        );
    }

    #[tokio::test]
    async fn test_dropped_responder_maps_to_communication_error() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(client);

        let get_task = tokio::spawn(async move { client.get_user_by_id(3).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, 3);
        drop(responder);

        assert_eq!(
            get_task.await.unwrap(),
            Err(UserError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }
}
