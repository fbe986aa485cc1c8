use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + Debug + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Overwrite the ID, used when the actor allocates one or re-keys a replacement
    fn assign_id(&mut self, id: Self::Id);

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, _previous: &Self) -> Result<(), String> { Ok(()) }
    fn on_delete(&self) -> Result<(), String> { Ok(()) }
}

/// Errors produced by the generic actor and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item already exists: {0}")]
    DuplicateId(String),
    #[error("Rejected: {0}")]
    Rejected(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T>,
    },
    /// Store an item under the ID it already carries.
    Insert {
        item: T,
        respond_to: Response<T>,
    },
    /// Store an item under a freshly allocated ID.
    Create {
        item: T,
        respond_to: Response<T>,
    },
    Replace {
        id: T::Id,
        item: T,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id_fn: Box<dyn FnMut() -> T::Id + Send>,
    // Drawn but not yet stored; reused until a create succeeds
    pending_id: Option<T::Id>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id_fn: Box::new(next_id_fn),
            pending_id: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Process requests until every client handle has been dropped.
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::List { respond_to } => {
                    // BTreeMap iteration is ordered by id
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(self.handle_get(id));
                }
                ResourceRequest::Insert { item, respond_to } => {
                    let _ = respond_to.send(self.handle_insert(item));
                }
                ResourceRequest::Create { mut item, respond_to } => {
                    let id = self.allocate_id();
                    item.assign_id(id);
                    let result = self.handle_insert(item);
                    if result.is_ok() {
                        self.pending_id = None;
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Replace { id, item, respond_to } => {
                    let _ = respond_to.send(self.handle_replace(id, item));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
            }
        }
        info!(remaining = self.store.len(), "ResourceActor stopped");
    }

    fn handle_get(&self, id: T::Id) -> Result<T, FrameworkError> {
        match self.store.get(&id) {
            Some(item) => Ok(item.clone()),
            None => {
                debug!(%id, "Item not found");
                Err(FrameworkError::NotFound(id.to_string()))
            }
        }
    }

    fn handle_insert(&mut self, mut item: T) -> Result<T, FrameworkError> {
        let id = item.id().clone();
        if self.store.contains_key(&id) {
            warn!(%id, "Insert rejected, id already taken");
            return Err(FrameworkError::DuplicateId(id.to_string()));
        }
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.insert(id.clone(), item.clone());
        debug!(%id, "Item inserted");
        Ok(item)
    }

    fn handle_replace(&mut self, id: T::Id, mut item: T) -> Result<T, FrameworkError> {
        let Some(current) = self.store.get_mut(&id) else {
            debug!(%id, "Replace target not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.assign_id(id.clone());
        item.on_update(current).map_err(FrameworkError::Rejected)?;
        *current = item.clone();
        debug!(%id, "Item replaced");
        Ok(item)
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let Some(item) = self.store.get(&id) else {
            debug!(%id, "Delete target not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.on_delete().map_err(FrameworkError::Rejected)?;
        self.store.remove(&id);
        debug!(%id, "Item deleted");
        Ok(())
    }

    /// Next free id. A candidate drawn for a create that failed is offered
    /// again before the generator is advanced.
    fn allocate_id(&mut self) -> T::Id {
        if let Some(id) = self.pending_id.take() {
            if !self.store.contains_key(&id) {
                self.pending_id = Some(id.clone());
                return id;
            }
        }
        loop {
            let id = (self.next_id_fn)();
            if !self.store.contains_key(&id) {
                self.pending_id = Some(id.clone());
                return id;
            }
        }
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
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn insert(&self, item: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Insert { item, respond_to }).await
    }

    pub async fn create(&self, item: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { item, respond_to }).await
    }

    pub async fn replace(&self, id: T::Id, item: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Replace { id, item, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
