//! Browser-backed expense snapshot.
//!
//! The snapshot lives in `localStorage` under one key. Other views on the same
//! page learn about a save through the `bp_expenses_changed` event, other tabs
//! through the browser's `storage` event (which never fires in the tab that
//! wrote). [`ExpenseCache::subscribe`] listens on both and delivers the parsed
//! list to a single callback.

use gloo::events::EventListener;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use shared::{Expense, ExpenseSnapshotStore, SnapshotListener, StoreError};
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;

/// Same-page broadcast fired after every save
pub const CHANGE_EVENT: &str = "bp_expenses_changed";

const COMPONENT: &str = "expense-cache";

#[derive(Clone, PartialEq)]
pub struct ExpenseCache {
    key: String,
}

impl ExpenseCache {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn broadcast(&self) -> anyhow::Result<()> {
        let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let event = web_sys::Event::new(CHANGE_EVENT)
            .map_err(|e| anyhow::anyhow!("failed to create {} event: {:?}", CHANGE_EVENT, e))?;
        window
            .dispatch_event(&event)
            .map_err(|e| anyhow::anyhow!("failed to dispatch {} event: {:?}", CHANGE_EVENT, e))?;
        Ok(())
    }

    /// Snapshot for a subscriber; unreadable data is reported as an empty list
    fn read_for_listener(&self) -> Vec<Expense> {
        match self.load() {
            Ok(expenses) => expenses.unwrap_or_default(),
            Err(e) => {
                log::error!(target: COMPONENT, "Failed to read local expenses: {}", e);
                Vec::new()
            }
        }
    }
}

impl ExpenseSnapshotStore for ExpenseCache {
    type Subscription = CacheSubscription;

    fn load(&self) -> Result<Option<Vec<Expense>>, StoreError> {
        match LocalStorage::get::<Vec<Expense>>(&self.key) {
            Ok(expenses) => Ok(Some(expenses)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(StoreError::Corrupt(e)),
            Err(e) => Err(StoreError::Unavailable(e.to_string())),
        }
    }

    fn save(&self, expenses: &[Expense]) -> Result<(), StoreError> {
        LocalStorage::set(&self.key, expenses).map_err(|e| StoreError::Write(e.to_string()))?;

        if let Err(e) = self.broadcast() {
            log::warn!(target: COMPONENT, "Saved expenses but could not notify other views: {}", e);
        }
        Ok(())
    }

    fn subscribe(&self, listener: SnapshotListener) -> CacheSubscription {
        let Some(window) = web_sys::window() else {
            log::warn!(target: COMPONENT, "No window; cache changes will not be observed");
            return CacheSubscription { _listeners: Vec::new() };
        };

        let same_page = {
            let cache = self.clone();
            let listener = listener.clone();
            EventListener::new(&window, CHANGE_EVENT, move |_| {
                listener(cache.read_for_listener());
            })
        };

        let other_tabs = {
            let key = self.key.clone();
            EventListener::new(&window, "storage", move |event| {
                let Some(event) = event.dyn_ref::<StorageEvent>() else {
                    return;
                };
                // A null key means the whole storage area was cleared
                match event.key() {
                    Some(changed) if changed != key => {}
                    _ => listener(parse_snapshot(event.new_value().as_deref())),
                }
            })
        };

        CacheSubscription {
            _listeners: vec![same_page, other_tabs],
        }
    }
}

/// Keeps both event listeners alive; dropping it unsubscribes
pub struct CacheSubscription {
    _listeners: Vec<EventListener>,
}

/// Parse a snapshot carried by a `storage` event. Missing or corrupt values
/// are treated as an empty list.
pub fn parse_snapshot(raw: Option<&str>) -> Vec<Expense> {
    match raw {
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            log::error!(target: COMPONENT, "Ignoring unreadable expense snapshot: {}", e);
            Vec::new()
        }),
        None => Vec::new(),
    }
}
