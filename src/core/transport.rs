use crate::core::{QueryRequest, QueryResponse, QueryTransport, Result};
use reqwest::Client;

/// reqwest 實作。刻意不設定 timeout，也不重試
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl QueryTransport for HttpTransport {
    async fn post_json(&self, endpoint: &str, request: &QueryRequest) -> Result<QueryResponse> {
        tracing::debug!("POST {} (country={}, role={})", endpoint, request.country, request.user_role);

        // .json() 會自動帶上 Content-Type: application/json
        let response = self.client.post(endpoint).json(request).send().await?;

        // 不檢查狀態碼：只要回應是 JSON 就照樣顯示
        tracing::debug!("Server responded with status: {}", response.status());

        let body = response.text().await?;
        let data: QueryResponse = serde_json::from_str(&body)?;

        Ok(data)
    }
}
