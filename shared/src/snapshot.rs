//! # Expense snapshot store
//!
//! The local cache is a single serialized array of expenses, overwritten
//! wholesale by every successful fetch and every fallback mutation. Views only
//! see it through [`ExpenseSnapshotStore`]; the store itself is responsible for
//! telling other subscribers that the snapshot changed, whatever channel that
//! takes in the host environment.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::{Expense, StoreError};

/// Called with the full snapshot whenever it changes
pub type SnapshotListener = Rc<dyn Fn(Vec<Expense>)>;

/// Trait defining the narrow interface every view uses for the local cache
pub trait ExpenseSnapshotStore {
    /// Dropping the subscription stops delivery
    type Subscription;

    /// `Ok(None)` when nothing has been cached yet
    fn load(&self) -> Result<Option<Vec<Expense>>, StoreError>;

    /// Replace the cached snapshot and notify subscribers
    fn save(&self, expenses: &[Expense]) -> Result<(), StoreError>;

    fn subscribe(&self, listener: SnapshotListener) -> Self::Subscription;
}

#[derive(Default)]
struct MemoryInner {
    // Kept serialized so corrupt entries behave the same as in browser storage
    raw: Option<String>,
    listeners: Vec<(u64, SnapshotListener)>,
    next_listener: u64,
}

/// In-process snapshot store. Every clone shares the same slot, so two clones
/// behave like two views of the same page.
#[derive(Clone, Default)]
pub struct MemorySnapshotStore {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expenses(expenses: &[Expense]) -> Result<Self, StoreError> {
        let store = Self::new();
        store.inner.borrow_mut().raw = Some(serde_json::to_string(expenses)?);
        Ok(store)
    }

    /// Overwrite the slot with arbitrary text, bypassing serialization
    pub fn put_raw(&self, raw: impl Into<String>) {
        self.inner.borrow_mut().raw = Some(raw.into());
    }

    pub fn raw(&self) -> Option<String> {
        self.inner.borrow().raw.clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ExpenseSnapshotStore for MemorySnapshotStore {
    type Subscription = MemorySubscription;

    fn load(&self) -> Result<Option<Vec<Expense>>, StoreError> {
        match self.inner.borrow().raw.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(expenses)?;

        // Release the borrow before calling out; listeners may read the store
        let listeners: Vec<SnapshotListener> = {
            let mut inner = self.inner.borrow_mut();
            inner.raw = Some(raw);
            inner.listeners.iter().map(|(_, listener)| listener.clone()).collect()
        };

        for listener in listeners {
            listener(expenses.to_vec());
        }
        Ok(())
    }

    fn subscribe(&self, listener: SnapshotListener) -> MemorySubscription {
        let mut inner = self.inner.borrow_mut();
        let key = inner.next_listener;
        inner.next_listener += 1;
        inner.listeners.push((key, listener));

        MemorySubscription {
            key,
            store: Rc::downgrade(&self.inner),
        }
    }
}

/// Removes its listener from the store when dropped
pub struct MemorySubscription {
    key: u64,
    store: Weak<RefCell<MemoryInner>>,
}

impl Drop for MemorySubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.borrow_mut().listeners.retain(|(key, _)| *key != self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExpenseCategory, RecordId};

    fn sample() -> Vec<Expense> {
        vec![Expense {
            id: RecordId::remote("1"),
            name: "Coffee".to_string(),
            amount: 50.0,
            category: ExpenseCategory::Food,
            date: "2024-01-01".to_string(),
        }]
    }

    #[test]
    fn test_empty_store_loads_none() {
        let store = MemorySnapshotStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemorySnapshotStore::new();
        store.save(&sample()).unwrap();
        assert_eq!(store.load().unwrap(), Some(sample()));
    }

    #[test]
    fn test_corrupt_entry_is_an_error() {
        let store = MemorySnapshotStore::new();
        store.put_raw("{not json");
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_subscribers_see_saves_from_other_handles() {
        let store = MemorySnapshotStore::new();
        let other_view = store.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let _subscription = {
            let seen = seen.clone();
            store.subscribe(Rc::new(move |expenses: Vec<Expense>| seen.borrow_mut().push(expenses)))
        };

        other_view.save(&sample()).unwrap();
        assert_eq!(*seen.borrow(), vec![sample()]);
    }

    #[test]
    fn test_dropping_subscription_stops_delivery() {
        let store = MemorySnapshotStore::new();
        let calls = Rc::new(RefCell::new(0));

        let subscription = {
            let calls = calls.clone();
            store.subscribe(Rc::new(move |_: Vec<Expense>| *calls.borrow_mut() += 1))
        };
        store.save(&sample()).unwrap();
        assert_eq!(store.subscriber_count(), 1);

        drop(subscription);
        store.save(&sample()).unwrap();

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_listener_may_read_store() {
        let store = MemorySnapshotStore::new();
        let reader = store.clone();
        let loaded = Rc::new(RefCell::new(None));

        let _subscription = {
            let loaded = loaded.clone();
            store.subscribe(Rc::new(move |_: Vec<Expense>| {
                *loaded.borrow_mut() = reader.load().ok().flatten();
            }))
        };

        store.save(&sample()).unwrap();
        assert_eq!(*loaded.borrow(), Some(sample()));
    }
}
