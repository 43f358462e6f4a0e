use crate::core::render::render;
use crate::core::transport::HttpTransport;
use crate::core::{
    Display, InputSource, Outcome, QueryError, QueryRequest, QueryTransport, Result,
    SubmitterConfig,
};
use crate::utils::validation::validate_selection;

pub struct QuerySubmitter<I: InputSource, D: Display, C: SubmitterConfig, T: QueryTransport = HttpTransport> {
    input: I,
    display: D,
    config: C,
    transport: T,
}

impl<I: InputSource, D: Display, C: SubmitterConfig> QuerySubmitter<I, D, C, HttpTransport> {
    pub fn new(input: I, display: D, config: C) -> Self {
        Self::with_transport(input, display, config, HttpTransport::new())
    }
}

impl<I: InputSource, D: Display, C: SubmitterConfig, T: QueryTransport> QuerySubmitter<I, D, C, T> {
    pub fn with_transport(input: I, display: D, config: C, transport: T) -> Self {
        Self {
            input,
            display,
            config,
            transport,
        }
    }

    /// 讀取欄位、送出查詢並把結果寫入顯示區。錯誤不會往外拋
    pub async fn submit(&self) -> Outcome {
        let messages = self.config.messages();

        let request = match self.build_request() {
            Ok(request) => request,
            Err(QueryError::EmptyInput) => {
                tracing::warn!("Empty issue description, request not sent");
                self.display.show(&messages.empty_input);
                return Outcome::EmptyInput;
            }
            Err(e) => {
                tracing::warn!("Input rejected: {}", e);
                self.display.show(&format!("❌ {}.", e.user_friendly_message()));
                return Outcome::Rejected;
            }
        };

        self.display.show(&messages.in_progress);
        tracing::info!("Submitting legal query to {}", self.config.endpoint());

        match self.transport.post_json(self.config.endpoint(), &request).await {
            Ok(data) => {
                tracing::info!("Legal query answered");
                self.display
                    .show(&render(&data, self.config.render_style(), messages));
                Outcome::Rendered(data)
            }
            Err(e) => {
                tracing::error!("Legal query failed: {}", e);
                self.display.show(&messages.failure);
                Outcome::Failed
            }
        }
    }

    fn build_request(&self) -> Result<QueryRequest> {
        let fields = self.input.read_fields()?;

        let issue = fields.issue.trim();
        if issue.is_empty() {
            return Err(QueryError::EmptyInput);
        }

        validate_selection("country", &fields.country, self.config.countries())?;

        Ok(QueryRequest {
            user_input: issue.to_string(),
            country: fields.country,
            user_role: fields.role,
        })
    }
}
