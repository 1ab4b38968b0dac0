pub mod requests;
pub mod responses;

pub use requests::{BriefFields, GenerateRequest, NormalizeRequest};
pub use responses::{ErrorResponse, GenerateMeta, GenerateResponse, HealthResponse, NormalizeResponse};
