//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use crate::actor_framework::{Entity, Response, ResourceClient, ResourceRequest};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads requests off `receiver` and answers
/// through the supplied responder, including failures the real actor would
/// rarely produce.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Query, Response<Vec<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{ComplaintClient, UserClient};
    use crate::complaint_actor::{ComplaintAction, ComplaintActionResult, ComplaintError};
    use crate::domain::{Complaint, ComplaintCreate, ComplaintQuery, User, UserCreate};
    use crate::user_actor::UserError;

    fn complaint(owner: &str) -> Complaint {
        Complaint::new(
            "c1",
            ComplaintCreate {
                title: "Noise".into(),
                summary: "Drilling at night".into(),
                severity: 2,
                user_secret_code: owner.into(),
            },
        )
    }

    #[tokio::test]
    async fn test_register_sends_create() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move {
            client.register(UserCreate::new("Test", "test@example.com")).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        let user = User::new("secret01", params);
        responder.send(Ok(user.clone())).unwrap();

        assert_eq!(task.await.unwrap(), Ok(user));
    }

    #[tokio::test]
    async fn test_lookup_maps_missing_user() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let task = tokio::spawn(async move { client.lookup("unknown1").await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "unknown1");
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap(), Err(UserError::NotFound));
    }

    #[tokio::test]
    async fn test_list_for_owner_sends_owner_query() {
        let (inner, mut receiver) = create_mock_client::<Complaint>(10);
        let client = ComplaintClient::new(inner);

        let task = tokio::spawn(async move { client.list_for_owner("owner123").await });

        let (query, responder) = expect_list(&mut receiver).await.expect("Expected List request");
        assert_eq!(query, ComplaintQuery::OwnedBy("owner123".into()));
        responder.send(Ok(vec![complaint("owner123")])).unwrap();

        assert_eq!(task.await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_view_rejects_mismatched_result() {
        let (inner, mut receiver) = create_mock_client::<Complaint>(10);
        let client = ComplaintClient::new(inner);

        let task = tokio::spawn(async move { client.view("c1", "owner123").await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, "c1");
        match action {
            ComplaintAction::View { caller } => assert_eq!(caller, "owner123"),
            other => panic!("Unexpected action: {:?}", other),
        }
        responder.send(Ok(ComplaintActionResult::Resolve(()))).unwrap();

        assert!(matches!(task.await.unwrap(), Err(ComplaintError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_reported() {
        let (inner, mut receiver) = create_mock_client::<Complaint>(10);
        let client = ComplaintClient::new(inner);

        let task = tokio::spawn(async move { client.resolve("c1", "owner123").await });

        let (_, _, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        drop(responder);

        assert!(matches!(task.await.unwrap(), Err(ComplaintError::Unavailable(_))));
    }
}
