use gloo::net::http::{Request, RequestBuilder};
use shared::{
    Budget, CreateBudgetRequest, CreateTransactionRequest, LoginRequest, LoginResponse,
    SignupRequest, Transaction,
};

use crate::services::session;

/// API client for communicating with the backend server.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL.
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Attach the stored bearer token, when there is one.
    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match session::token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Create an account.
    pub async fn signup(&self, request: SignupRequest) -> Result<(), String> {
        let url = format!("{}/api/auth/signup", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Exchange credentials for a bearer token and profile. Invalid
    /// credentials and server errors reject the same way.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, String> {
        let url = format!("{}/api/auth/login", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<LoginResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch every transaction for the signed-in user.
    pub async fn get_transactions(&self) -> Result<Vec<Transaction>, String> {
        let url = format!("{}/api/transactions", self.base_url);

        match Self::authorized(Request::get(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Transaction>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse transactions: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Failed to fetch transactions: {}", e)),
        }
    }

    /// Record a new transaction.
    pub async fn create_transaction(
        &self,
        request: CreateTransactionRequest,
    ) -> Result<Transaction, String> {
        let url = format!("{}/api/transactions", self.base_url);

        match Self::authorized(Request::post(&url))
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Transaction>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch every budget for the signed-in user.
    pub async fn get_budgets(&self) -> Result<Vec<Budget>, String> {
        let url = format!("{}/api/budgets", self.base_url);

        match Self::authorized(Request::get(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Budget>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse budgets: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Failed to fetch budgets: {}", e)),
        }
    }

    /// Set a budget for a category and month.
    pub async fn create_budget(&self, request: CreateBudgetRequest) -> Result<Budget, String> {
        let url = format!("{}/api/budgets", self.base_url);

        match Self::authorized(Request::post(&url))
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Budget>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
