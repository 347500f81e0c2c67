use crate::movers::Mover;

/// In-memory, insertion-ordered collection of movers
///
/// This is the single source of truth for the service. It does no locking of
/// its own: `MoverService` wraps it in a `RwLock` and holds the write guard for
/// every check-then-mutate sequence.
#[derive(Debug, Clone, Default)]
pub struct MoverStore {
    movers: Vec<Mover>,
}

impl MoverStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `movers`, keeping their order
    pub fn with_movers(movers: Vec<Mover>) -> Self {
        Self { movers }
    }

    /// Append a mover at the end of the collection
    pub fn add(&mut self, mover: Mover) {
        self.movers.push(mover);
    }

    /// Remove the mover at `index`, shifting later movers down by one
    ///
    /// Returns `None` when `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Option<Mover> {
        if index < self.movers.len() {
            Some(self.movers.remove(index))
        } else {
            None
        }
    }

    /// Live view of the collection in storage order
    pub fn all(&self) -> &[Mover] {
        &self.movers
    }

    pub fn len(&self) -> usize {
        self.movers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movers.is_empty()
    }

    /// Find a mover by id (first match wins)
    pub fn find_by_id(&self, id: i64) -> Option<&Mover> {
        self.movers.iter().find(|mover| mover.id == id)
    }

    /// Mutable variant of [`MoverStore::find_by_id`]
    pub fn find_by_id_mut(&mut self, id: i64) -> Option<&mut Mover> {
        self.movers.iter_mut().find(|mover| mover.id == id)
    }

    /// Position of the first mover with `id`
    pub fn find_index_by_id(&self, id: i64) -> Option<usize> {
        self.movers.iter().position(|mover| mover.id == id)
    }

    /// True if any stored mover shares the id or the name
    pub fn contains_id_or_name(&self, id: i64, name: &str) -> bool {
        self.movers
            .iter()
            .any(|mover| mover.id == id || mover.name == name)
    }

    /// True if any stored mover uses this telephone number
    pub fn contains_telephone_number(&self, telephone_number: &str) -> bool {
        self.movers
            .iter()
            .any(|mover| mover.telephone_number == telephone_number)
    }
}
