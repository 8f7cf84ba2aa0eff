use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait, queries and actions)
// =============================================================================

/// How many fresh keys a table draws before giving up on a collision.
const KEY_ATTEMPTS: usize = 3;

/// Failures of the actor plumbing itself, independent of any entity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),
}

/// Trait that any domain entity must implement to be stored in a `ResourceActor`.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Query: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: std::error::Error + From<FrameworkError> + Send + Sync + 'static;

    /// Short name used in log lines.
    const KIND: &'static str;

    /// Get the table key of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated key and the params.
    /// Input validation belongs here.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Called against every stored row before an insert. Runs inside the
    /// actor, so the check and the insert are one critical section.
    fn check_conflict(&self, _existing: &Self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Row filter for `List` requests.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }

    /// Handle a custom domain-specific action on a stored row.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    List {
        query: T::Query,
        respond_to: Response<Vec<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one table. Requests are handled strictly one after another, so the
/// mailbox serializes every read and write on `store`.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> Option<T::Id> + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    /// `next_id_fn` returns `None` when no key could be produced.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> Option<T::Id> + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    pub async fn run(mut self) {
        info!(kind = T::KIND, "ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let snapshot: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(kind = T::KIND, rows = snapshot.len(), "Snapshot taken");
                    let _ = respond_to.send(Ok(snapshot));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => item.handle_action(action),
                        None => Err(FrameworkError::NotFound(id.to_string()).into()),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(kind = T::KIND, rows = self.store.len(), "ResourceActor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, T::Error> {
        let id = self.next_free_id()?;
        let item = T::from_create_params(id, params)?;
        for existing in self.store.values() {
            item.check_conflict(existing)?;
        }
        self.store.insert(item.id().clone(), item.clone());
        debug!(kind = T::KIND, rows = self.store.len(), "Row inserted");
        Ok(item)
    }

    fn next_free_id(&self) -> Result<T::Id, FrameworkError> {
        for attempt in 1..=KEY_ATTEMPTS {
            let Some(id) = (self.next_id_fn)() else {
                return Err(FrameworkError::KeyGeneration("generator produced no key".to_string()));
            };
            if !self.store.contains_key(&id) {
                return Ok(id);
            }
            warn!(kind = T::KIND, attempt, "Generated key already in use");
        }
        Err(FrameworkError::KeyGeneration(format!(
            "no free key after {} attempts",
            KEY_ATTEMPTS
        )))
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, T::Error> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self, query: T::Query) -> Result<Vec<T>, T::Error> {
        self.request(|respond_to| ResourceRequest::List { query, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, T::Error> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
