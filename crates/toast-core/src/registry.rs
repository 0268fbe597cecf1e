//! Active notification bookkeeping.
//!
//! Insertion order is the stacking order: earlier entries sit closer to
//! the anchor corner. Ids are allocated from a single monotonically
//! increasing counter and are never reused for the life of the process,
//! even after closure.

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

/// One visible notification and the resources it owns.
pub struct Notification<W> {
    pub id: u32,
    pub summary: String,
    pub body: String,
    /// Renderer window, exclusively owned; destroyed when the entry is
    /// removed.
    pub window: W,
    /// Cancels the pending expiry timer, when one was scheduled.
    pub expiry: Option<CancellationToken>,
    pub created_at: DateTime<Utc>,
}

/// Ordered mapping from notification id to its entry.
pub struct Registry<W> {
    entries: Vec<Notification<W>>,
    last_id: u32,
}

impl<W> Registry<W> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            last_id: 0,
        }
    }

    /// Hand out the next notification id. Ids start at 1 and strictly
    /// increase; closure never returns an id to the pool.
    pub fn allocate_id(&mut self) -> u32 {
        self.last_id += 1;
        self.last_id
    }

    pub fn insert(&mut self, entry: Notification<W>) {
        debug_assert!(!self.contains(entry.id));
        self.entries.push(entry);
    }

    pub fn remove(&mut self, id: u32) -> Option<Notification<W>> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Notification<W>> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in stacking order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification<W>> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Notification<W>> {
        self.entries.iter_mut()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Notification<W>> + '_ {
        self.entries.drain(..)
    }
}

impl<W> Default for Registry<W> {
    fn default() -> Self {
        Self::new()
    }
}
