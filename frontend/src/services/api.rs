use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ApiError, Expense, ExpensePayload, ExpenseRemote, Income, IncomePayload, IncomeRemote, RecordId};

use super::config::AppConfig;

/// API client for the expense and income collections
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client pointed at the configured API origin
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.api_url.clone())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn expenses_url(&self) -> String {
        format!("{}/api/expenses", self.base_url)
    }

    fn incomes_url(&self) -> String {
        format!("{}/api/incomes", self.base_url)
    }

    fn record_url(collection: String, id: &RecordId) -> String {
        format!("{}/{}", collection, id)
    }
}

#[async_trait(?Send)]
impl ExpenseRemote for ApiClient {
    async fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let response = send(Request::get(&self.expenses_url()).send().await).await?;
        decode(response).await
    }

    async fn create_expense(&self, payload: &ExpensePayload) -> Result<(), ApiError> {
        let request = Request::post(&self.expenses_url())
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        send(request.send().await).await.map(|_| ())
    }

    async fn update_expense(&self, id: &RecordId, payload: &ExpensePayload) -> Result<(), ApiError> {
        let request = Request::put(&Self::record_url(self.expenses_url(), id))
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        send(request.send().await).await.map(|_| ())
    }

    async fn delete_expense(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = Self::record_url(self.expenses_url(), id);
        send(Request::delete(&url).send().await).await.map(|_| ())
    }
}

#[async_trait(?Send)]
impl IncomeRemote for ApiClient {
    async fn list_incomes(&self) -> Result<Vec<Income>, ApiError> {
        let response = send(Request::get(&self.incomes_url()).send().await).await?;
        decode(response).await
    }

    async fn create_income(&self, payload: &IncomePayload) -> Result<Income, ApiError> {
        let request = Request::post(&self.incomes_url())
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = send(request.send().await).await?;
        decode(response).await
    }

    async fn update_income(&self, id: &RecordId, payload: &IncomePayload) -> Result<(), ApiError> {
        let request = Request::put(&Self::record_url(self.incomes_url(), id))
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        send(request.send().await).await.map(|_| ())
    }

    async fn delete_income(&self, id: &RecordId) -> Result<(), ApiError> {
        let url = Self::record_url(self.incomes_url(), id);
        send(Request::delete(&url).send().await).await.map(|_| ())
    }
}

/// Turn transport failures and non-2xx statuses into [`ApiError`]
async fn send(result: Result<Response, gloo::net::Error>) -> Result<Response, ApiError> {
    match result {
        Ok(response) => {
            if response.ok() {
                Ok(response)
            } else {
                let status = response.status();
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ApiError::Status { status, body })
            }
        }
        Err(e) => Err(ApiError::Network(e.to_string())),
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
