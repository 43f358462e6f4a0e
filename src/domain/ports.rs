use crate::domain::model::{Messages, QueryFields, QueryRequest, QueryResponse, RenderStyle};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where the three query fields come from.
pub trait InputSource: Send + Sync {
    fn read_fields(&self) -> Result<QueryFields>;
}

/// The display region. Every call replaces what was shown before.
pub trait Display: Send + Sync {
    fn show(&self, message: &str);
}

pub trait SubmitterConfig: Send + Sync {
    fn endpoint(&self) -> &str;
    fn render_style(&self) -> RenderStyle;
    fn messages(&self) -> &Messages;
    fn countries(&self) -> &[String];
}

#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn post_json(&self, endpoint: &str, request: &QueryRequest) -> Result<QueryResponse>;
}
