pub mod render;
pub mod submitter;
pub mod transport;

pub use crate::domain::model::{
    Messages, Outcome, Profile, QueryFields, QueryRequest, QueryResponse, RenderStyle, Role,
};
pub use crate::domain::ports::{Display, InputSource, QueryTransport, SubmitterConfig};
pub use crate::utils::error::{QueryError, Result};
