use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    Account, ApiError, BusinessDirection, CashFlowReport, Category, CreateAccountRequest,
    CreateNamedRequest, CreatePlannedTransactionRequest, CreateTransactionRequest,
    MessageResponse, PlannedTransaction, ProfitLossReport, ReportRange, Slice, SliceUpdate,
    Transaction, UpdateAccountRequest,
};

const CONTENT_TYPE: (&str, &str) = ("Content-Type", "application/json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Per-call options for [`ApiClient::request`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    /// Extra headers; a header named here replaces the default of the same name
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl RequestOptions {
    pub fn post() -> Self {
        Self {
            method: Method::Post,
            ..Self::default()
        }
    }

    pub fn delete() -> Self {
        Self {
            method: Method::Delete,
            ..Self::default()
        }
    }

    /// POST with `body` encoded as JSON
    pub fn post_json<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self::post().with_json(body)
    }

    pub fn put_json<T: Serialize>(body: &T) -> Result<Self, ApiError> {
        Self {
            method: Method::Put,
            ..Self::default()
        }
        .with_json(body)
    }

    fn with_json<T: Serialize>(self, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            body: Some(body),
            ..self
        })
    }

    /// Default JSON content type merged with the caller's headers, caller wins.
    /// Header names compare case-insensitively, as HTTP does.
    pub fn merged_headers(&self) -> Vec<(String, String)> {
        let (name, value) = CONTENT_TYPE;
        let overridden = self
            .headers
            .iter()
            .any(|(key, _)| key.eq_ignore_ascii_case(name));

        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        if !overridden {
            headers.push((name.to_string(), value.to_string()));
        }
        headers.extend(self.headers.iter().cloned());
        headers
    }
}

/// API client for the finance backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url(shared::AppConfig::default().api_base)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issue one call against `{base}{endpoint}` and decode the JSON body.
    ///
    /// Non-2xx statuses fail with [`ApiError::Status`] without reading the body.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let url = self.url(endpoint);
        let result = self.send::<T>(&url, &options).await;
        if let Err(e) = &result {
            log::error!("API call failed: {} {}: {}", options.method.as_str(), url, e);
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<T, ApiError> {
        let mut builder: RequestBuilder = match options.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        };
        for (name, value) in options.merged_headers() {
            builder = builder.header(&name, &value);
        }

        let request = match &options.body {
            Some(body) => builder.body(body.clone()),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        decode_response(response).await
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(endpoint, RequestOptions::default()).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(endpoint, RequestOptions::post_json(body)?).await
    }

    pub async fn accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get(Slice::Accounts.endpoint()).await
    }

    pub async fn income_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get(Slice::IncomeCategories.endpoint()).await
    }

    pub async fn expense_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get(Slice::ExpenseCategories.endpoint()).await
    }

    pub async fn business_directions(&self) -> Result<Vec<BusinessDirection>, ApiError> {
        self.get(Slice::BusinessDirections.endpoint()).await
    }

    pub async fn transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get(Slice::Transactions.endpoint()).await
    }

    pub async fn planned_transactions(&self) -> Result<Vec<PlannedTransaction>, ApiError> {
        self.get(Slice::PlannedTransactions.endpoint()).await
    }

    /// Fetch one store slice, ready to apply
    pub async fn load_slice(&self, slice: Slice) -> Result<SliceUpdate, ApiError> {
        Ok(match slice {
            Slice::Accounts => SliceUpdate::Accounts(self.accounts().await?),
            Slice::IncomeCategories => SliceUpdate::IncomeCategories(self.income_categories().await?),
            Slice::ExpenseCategories => {
                SliceUpdate::ExpenseCategories(self.expense_categories().await?)
            }
            Slice::BusinessDirections => {
                SliceUpdate::BusinessDirections(self.business_directions().await?)
            }
            Slice::Transactions => SliceUpdate::Transactions(self.transactions().await?),
            Slice::PlannedTransactions => {
                SliceUpdate::PlannedTransactions(self.planned_transactions().await?)
            }
        })
    }

    pub async fn create_transaction(
        &self,
        request: &CreateTransactionRequest,
    ) -> Result<Transaction, ApiError> {
        self.post("/transactions", request).await
    }

    pub async fn create_planned_transaction(
        &self,
        request: &CreatePlannedTransactionRequest,
    ) -> Result<PlannedTransaction, ApiError> {
        self.post("/planned-transactions", request).await
    }

    /// Post the planned transaction as a real one
    pub async fn complete_planned_transaction(&self, id: i64) -> Result<Transaction, ApiError> {
        self.request(&complete_endpoint(id), RequestOptions::post())
            .await
    }

    pub async fn cash_flow(&self, range: &ReportRange) -> Result<CashFlowReport, ApiError> {
        self.get(&report_endpoint("cash-flow", range)).await
    }

    pub async fn profit_loss(&self, range: &ReportRange) -> Result<ProfitLossReport, ApiError> {
        self.get(&report_endpoint("profit-loss", range)).await
    }

    /// Ask the backend to create its sample dataset
    pub async fn init_test_data(&self) -> Result<MessageResponse, ApiError> {
        self.request("/init-test-data", RequestOptions::post()).await
    }

    pub async fn create_account(&self, request: &CreateAccountRequest) -> Result<Account, ApiError> {
        self.post("/accounts", request).await
    }

    /// Rename or retype an account; the backend answers with the updated account
    pub async fn update_account(
        &self,
        id: i64,
        request: &UpdateAccountRequest,
    ) -> Result<Account, ApiError> {
        self.request(&account_endpoint(id), RequestOptions::put_json(request)?)
            .await
    }

    pub async fn deactivate_account(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.request(&account_endpoint(id), RequestOptions::delete())
            .await
    }

    pub async fn create_income_category(
        &self,
        request: &CreateNamedRequest,
    ) -> Result<Category, ApiError> {
        self.post(Slice::IncomeCategories.endpoint(), request).await
    }

    pub async fn create_expense_category(
        &self,
        request: &CreateNamedRequest,
    ) -> Result<Category, ApiError> {
        self.post(Slice::ExpenseCategories.endpoint(), request).await
    }

    pub async fn create_business_direction(
        &self,
        request: &CreateNamedRequest,
    ) -> Result<BusinessDirection, ApiError> {
        self.post(Slice::BusinessDirections.endpoint(), request).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// A non-2xx status fails with [`ApiError::Status`] before the body is read
async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn account_endpoint(id: i64) -> String {
    format!("/accounts/{}", id)
}

fn complete_endpoint(id: i64) -> String {
    format!("/planned-transactions/{}/complete", id)
}

fn report_endpoint(report: &str, range: &ReportRange) -> String {
    format!("/reports/{}?{}", report, range.query())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_client_uses_api_prefix() {
        let client = ApiClient::default();
        assert_eq!(client.url("/accounts"), "/api/accounts");
    }

    #[wasm_bindgen_test]
    fn test_custom_base_url() {
        let client = ApiClient::with_base_url("http://localhost:5000/api".to_string());
        assert_eq!(
            client.url(&complete_endpoint(42)),
            "http://localhost:5000/api/planned-transactions/42/complete"
        );
    }

    #[wasm_bindgen_test]
    fn test_report_endpoint_carries_range() {
        let range = ReportRange::new("2025-01-01", "2025-01-31").unwrap();
        assert_eq!(
            report_endpoint("cash-flow", &range),
            "/reports/cash-flow?start_date=2025-01-01&end_date=2025-01-31"
        );
    }

    #[wasm_bindgen_test]
    fn test_default_content_type_is_json() {
        let headers = RequestOptions::default().merged_headers();
        assert_eq!(
            headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[wasm_bindgen_test]
    fn test_caller_headers_win() {
        let options = RequestOptions {
            headers: vec![
                ("content-type".to_string(), "text/plain".to_string()),
                ("X-Request-Id".to_string(), "7".to_string()),
            ],
            ..RequestOptions::default()
        };
        let headers = options.merged_headers();
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0], ("content-type".to_string(), "text/plain".to_string()));
        assert_eq!(headers[1].0, "X-Request-Id");
    }

    fn response(status: u16, body: &str) -> Response {
        let init = web_sys::ResponseInit::new();
        init.set_status(status);
        let raw = web_sys::Response::new_with_opt_str_and_init(Some(body), &init).unwrap();
        Response::from(raw)
    }

    #[wasm_bindgen_test]
    async fn test_error_status_is_reported_without_reading_body() {
        let response = response(500, "<html>Internal Server Error</html>");
        let result = decode_response::<Vec<Account>>(response).await;
        assert_eq!(result, Err(ApiError::Status(500)));
    }

    #[wasm_bindgen_test]
    async fn test_not_found_maps_to_status() {
        let result = decode_response::<MessageResponse>(response(404, "{}")).await;
        assert_eq!(result, Err(ApiError::Status(404)));
    }

    #[wasm_bindgen_test]
    async fn test_ok_body_is_decoded() {
        let ok = response(200, r#"{"message":"done"}"#);
        let result = decode_response::<MessageResponse>(ok).await;
        assert_eq!(result.unwrap().message, "done");

        let result = decode_response::<Vec<Account>>(response(200, "not json")).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[wasm_bindgen_test]
    fn test_put_json_targets_account() {
        let options = RequestOptions::put_json(&UpdateAccountRequest {
            name: "Main card".to_string(),
            account_type: "card".to_string(),
        })
        .unwrap();
        assert_eq!(options.method, Method::Put);
        assert_eq!(options.method.as_str(), "PUT");
        assert_eq!(
            options.body.as_deref(),
            Some(r#"{"name":"Main card","account_type":"card"}"#)
        );
        assert_eq!(account_endpoint(4), "/accounts/4");
    }

    #[wasm_bindgen_test]
    fn test_post_json_encodes_body() {
        let options = RequestOptions::post_json(&CreateNamedRequest {
            name: "Printing".to_string(),
        })
        .unwrap();
        assert_eq!(options.method, Method::Post);
        assert_eq!(options.body.as_deref(), Some(r#"{"name":"Printing"}"#));
    }
}
