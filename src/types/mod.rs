pub mod analysis;
pub mod response;

pub use analysis::{AnalysisResult, ScoreTier};
pub use response::{ApiErrorBody, HealthResponse};
