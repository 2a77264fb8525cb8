//! Income entries live only on the server. There is no cache and no fallback:
//! a failed call leaves the in-memory list as it was and the error goes back
//! to the caller.

use async_trait::async_trait;

use crate::{ApiError, Income, IncomeForm, IncomePayload, RecordId, SyncError};

/// The remote income collection (`GET/POST/PUT/DELETE /api/incomes`)
#[async_trait(?Send)]
pub trait IncomeRemote {
    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError>;

    /// Returns the record as stored by the server, id included
    async fn create_income(&self, payload: &IncomePayload) -> Result<Income, ApiError>;

    async fn update_income(&self, id: &RecordId, payload: &IncomePayload) -> Result<(), ApiError>;

    async fn delete_income(&self, id: &RecordId) -> Result<(), ApiError>;
}

pub struct IncomeBook<R> {
    remote: R,
}

impl<R: IncomeRemote> IncomeBook<R> {
    pub fn new(remote: R) -> Self {
        Self { remote }
    }

    pub async fn load(&self) -> Result<Vec<Income>, SyncError> {
        Ok(self.remote.list_incomes().await?)
    }

    /// Create or update, returning the next in-memory list.
    ///
    /// Updates are applied from the submitted payload; creates append the
    /// server's response.
    pub async fn submit(
        &self,
        current: &[Income],
        form: &IncomeForm,
        edit_target: Option<&RecordId>,
    ) -> Result<Vec<Income>, SyncError> {
        let payload = form.validate()?;
        let mut next = current.to_vec();

        match edit_target {
            Some(id) => {
                self.remote.update_income(id, &payload).await?;
                if let Some(income) = next.iter_mut().find(|income| &income.id == id) {
                    income.apply(&payload);
                }
            }
            None => {
                let created = self.remote.create_income(&payload).await?;
                next.push(created);
            }
        }

        Ok(next)
    }

    pub async fn delete(&self, current: &[Income], id: &RecordId) -> Result<Vec<Income>, SyncError> {
        self.remote.delete_income(id).await?;
        Ok(current
            .iter()
            .filter(|income| &income.id != id)
            .cloned()
            .collect())
    }
}
