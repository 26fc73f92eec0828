//! Repository abstraction over stored records.
//!
//! The calculators never talk to storage. Callers read immutable snapshots
//! through [`Repository`] and hand plain records to the engine.

use crate::models::{EquityLog, FinancialProfile, LineItem, Project, Scenario};

/// A record addressable by a string id.
pub trait Record: Clone {
    /// Returns the record id.
    fn id(&self) -> &str;
}

impl Record for FinancialProfile {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Scenario {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for LineItem {
    fn id(&self) -> &str {
        LineItem::id(self)
    }
}

impl Record for EquityLog {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Read access to a collection of records.
///
/// Every method returns owned snapshots; later writes to the store never
/// show through a value already returned.
pub trait Repository<T: Record> {
    /// Looks up a record by id.
    fn get(&self, id: &str) -> Option<T>;

    /// Returns every record matching `predicate`, in insertion order.
    fn query(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T>;

    /// Returns every record, in insertion order.
    fn all(&self) -> Vec<T> {
        self.query(&|_| true)
    }
}

/// An insertion-ordered, in-memory repository.
///
/// # Example
///
/// ```
/// use budget_engine::models::FinancialProfile;
/// use budget_engine::store::{InMemoryRepository, Repository};
///
/// let mut profiles = InMemoryRepository::new();
/// profiles.insert(FinancialProfile::new("profile-1", "collab-1", 2024));
///
/// assert!(profiles.get("profile-1").is_some());
/// assert_eq!(profiles.query(&|p| p.collaborator_id == "collab-1").len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Vec<T>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Record> InMemoryRepository<T> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record.
    ///
    /// A record whose id already exists replaces the old one in place and
    /// keeps its insertion position; otherwise the record is appended.
    pub fn insert(&mut self, record: T) {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Removes and returns the record with the given id.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.records.iter().position(|r| r.id() == id)?;
        Some(self.records.remove(index))
    }

    /// Removes every record matching `predicate`, returning how many went.
    pub fn remove_where(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !predicate(r));
        before - self.records.len()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Record> Repository<T> for InMemoryRepository<T> {
    fn get(&self, id: &str) -> Option<T> {
        self.records.iter().find(|r| r.id() == id).cloned()
    }

    fn query(&self, predicate: &dyn Fn(&T) -> bool) -> Vec<T> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }
}

impl<T: Record> FromIterator<T> for InMemoryRepository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut repo = Self::new();
        for record in iter {
            repo.insert(record);
        }
        repo
    }
}
