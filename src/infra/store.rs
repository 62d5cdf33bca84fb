//! Generic in-memory entity store.
//!
//! A store owns an insertion-ordered collection keyed by a unique integer id
//! and hands out clones, never references into the collection. It does no
//! locking of its own; the owning service serializes access.

/// Behavior an entity type needs to live in a [`MemoryStore`]
pub trait Entity: Clone + Send + Sync + 'static {
    /// Typed id wrapper over a positive integer
    type Id: Copy + Eq + From<u32> + Into<u32> + Send;
    /// Creation payload: everything except the id
    type Draft: Send;
    /// Partial update payload
    type Patch: Send;

    fn id(&self) -> Self::Id;

    /// Build a full entity from a store-assigned id and a draft
    fn build(id: Self::Id, draft: Self::Draft) -> Self;

    /// Shallow-merge a patch onto this entity
    fn merge(&mut self, patch: Self::Patch);
}

/// In-memory collection with CRUD accessors
#[derive(Debug, Clone)]
pub struct MemoryStore<E: Entity> {
    items: Vec<E>,
}

impl<E: Entity> MemoryStore<E> {
    /// Create an empty store
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a store seeded with initial data
    pub fn with_items(items: Vec<E>) -> Self {
        Self { items }
    }

    /// All entities in insertion order
    pub fn list(&self) -> Vec<E> {
        self.items.clone()
    }

    /// Look up one entity; absence is not a fault
    pub fn get(&self, id: E::Id) -> Option<E> {
        self.items.iter().find(|e| e.id() == id).cloned()
    }

    /// First entity matching a predicate
    pub fn find<P>(&self, mut predicate: P) -> Option<E>
    where
        P: FnMut(&E) -> bool,
    {
        self.items.iter().find(|&e| predicate(e)).cloned()
    }

    /// Append a new entity under the next free id and return it
    pub fn insert(&mut self, draft: E::Draft) -> E {
        let entity = E::build(self.next_id(), draft);
        self.items.push(entity.clone());
        entity
    }

    /// Shallow-merge a patch onto the entity at `id`
    pub fn update(&mut self, id: E::Id, patch: E::Patch) -> Option<E> {
        let entity = self.items.iter_mut().find(|e| e.id() == id)?;
        entity.merge(patch);
        Some(entity.clone())
    }

    /// Mutate the entity at `id` through a closure and return the result
    pub fn modify<F>(&mut self, id: E::Id, f: F) -> Option<E>
    where
        F: FnOnce(&mut E),
    {
        let entity = self.items.iter_mut().find(|e| e.id() == id)?;
        f(entity);
        Some(entity.clone())
    }

    /// Remove the entity at `id`, reporting whether anything was removed
    pub fn remove(&mut self, id: E::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|e| e.id() != id);
        self.items.len() < before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ids are one greater than the current maximum, starting at 1
    fn next_id(&self) -> E::Id {
        let max = self
            .items
            .iter()
            .map(|e| e.id().into())
            .max()
            .unwrap_or(0u32);
        E::Id::from(max + 1)
    }
}

impl<E: Entity> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}
