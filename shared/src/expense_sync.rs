//! # Expense synchronisation
//!
//! Every operation tries the remote collection first and awaits it before the
//! local cache is touched. A failed remote call degrades to the equivalent
//! mutation on the cached snapshot, so the view always has a list to show.
//!
//! Concurrent calls are not serialized against each other. Two fallbacks
//! racing on the cache can lose an update; the last save wins.

use async_trait::async_trait;
use log::{error, warn};

use crate::{
    Alert, ApiError, Expense, ExpenseForm, ExpensePayload, ExpenseSnapshotStore, RecordId,
    ValidationError,
};

/// The remote expense collection (`GET/POST/PUT/DELETE /api/expenses`)
#[async_trait(?Send)]
pub trait ExpenseRemote {
    async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError>;

    async fn create_expense(&self, payload: &ExpensePayload) -> Result<(), ApiError>;

    async fn update_expense(&self, id: &RecordId, payload: &ExpensePayload) -> Result<(), ApiError>;

    async fn delete_expense(&self, id: &RecordId) -> Result<(), ApiError>;
}

/// Where the list handed back to the view came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fresh from the API, now mirrored into the cache
    Remote,
    /// Read from (or written to) the local cache after a remote failure
    Cache,
    /// Remote failed and nothing usable was cached
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub expenses: Vec<Expense>,
    pub source: DataSource,
}

/// Result of a create, update or delete, including the alert to surface
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub expenses: Vec<Expense>,
    pub alert: Alert,
    pub source: DataSource,
}

pub struct ExpenseSync<R, S> {
    remote: R,
    store: S,
}

impl<R, S> ExpenseSync<R, S>
where
    R: ExpenseRemote,
    S: ExpenseSnapshotStore,
{
    pub fn new(remote: R, store: S) -> Self {
        Self { remote, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the full collection. On success the cache is overwritten with
    /// exactly that list; on failure the cache is the answer.
    pub async fn load(&self) -> LoadOutcome {
        match self.remote.list_expenses().await {
            Ok(expenses) => {
                if let Err(e) = self.store.save(&expenses) {
                    error!("Failed to persist local expenses: {}", e);
                }
                LoadOutcome {
                    expenses,
                    source: DataSource::Remote,
                }
            }
            Err(e) => {
                warn!("Fetch expenses failed, falling back to local cache: {}", e);
                match self.store.load() {
                    Ok(Some(expenses)) => LoadOutcome {
                        expenses,
                        source: DataSource::Cache,
                    },
                    Ok(None) => LoadOutcome {
                        expenses: Vec::new(),
                        source: DataSource::Empty,
                    },
                    Err(e) => {
                        error!("Failed to read local expenses: {}", e);
                        LoadOutcome {
                            expenses: Vec::new(),
                            source: DataSource::Empty,
                        }
                    }
                }
            }
        }
    }

    /// Create (no edit target) or update (edit target set) an expense.
    ///
    /// Validation failures return before any network call.
    pub async fn submit(
        &self,
        form: &ExpenseForm,
        edit_target: Option<&RecordId>,
    ) -> Result<MutationOutcome, ValidationError> {
        let payload = form.validate()?;
        Ok(self.submit_payload(payload, edit_target, now_millis()).await)
    }

    async fn submit_payload(
        &self,
        payload: ExpensePayload,
        edit_target: Option<&RecordId>,
        now_millis: i64,
    ) -> MutationOutcome {
        let remote_result = match edit_target {
            Some(id) => self.remote.update_expense(id, &payload).await,
            None => self.remote.create_expense(&payload).await,
        };

        match remote_result {
            Ok(()) => {
                let loaded = self.load().await;
                let message = if edit_target.is_some() {
                    "Expense updated"
                } else {
                    "Expense added"
                };
                MutationOutcome {
                    expenses: loaded.expenses,
                    alert: Alert::success(message),
                    source: loaded.source,
                }
            }
            Err(e) => {
                error!("Server error - performing local fallback: {}", e);
                let mut expenses = self.cached_or_empty();
                match edit_target {
                    Some(id) => update_in_place(&mut expenses, id, &payload),
                    None => {
                        prepend_local(&mut expenses, payload, now_millis);
                    }
                }
                self.persist(&expenses);
                MutationOutcome {
                    expenses,
                    alert: Alert::warning("Server error. Saved locally."),
                    source: DataSource::Cache,
                }
            }
        }
    }

    /// Remove an expense. Deleting an id that is not present is a no-op on
    /// the local side.
    pub async fn delete(&self, id: &RecordId) -> MutationOutcome {
        match self.remote.delete_expense(id).await {
            Ok(()) => {
                let loaded = self.load().await;
                MutationOutcome {
                    expenses: loaded.expenses,
                    alert: Alert::info("Expense deleted"),
                    source: loaded.source,
                }
            }
            Err(e) => {
                warn!("Delete failed on server, deleting locally: {}", e);
                let mut expenses = self.cached_or_empty();
                expenses.retain(|expense| &expense.id != id);
                self.persist(&expenses);
                MutationOutcome {
                    expenses,
                    alert: Alert::warning("Deleted locally (server error)"),
                    source: DataSource::Cache,
                }
            }
        }
    }

    fn cached_or_empty(&self) -> Vec<Expense> {
        match self.store.load() {
            Ok(cached) => cached.unwrap_or_default(),
            Err(e) => {
                error!("Failed to read local expenses: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, expenses: &[Expense]) {
        if let Err(e) = self.store.save(expenses) {
            error!("Fallback persist failed: {}", e);
        }
    }
}

/// Replace the matching record's fields; a missing id leaves the list alone
pub fn update_in_place(expenses: &mut [Expense], id: &RecordId, payload: &ExpensePayload) {
    if let Some(expense) = expenses.iter_mut().find(|expense| &expense.id == id) {
        expense.apply(payload);
    }
}

/// Put a new locally identified record at the front of the list
pub fn prepend_local(expenses: &mut Vec<Expense>, payload: ExpensePayload, now_millis: i64) -> RecordId {
    let id = RecordId::next_local(expenses.iter().map(|expense| &expense.id), now_millis);
    expenses.insert(0, Expense::from_payload(id.clone(), payload));
    id
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
