pub mod analysis;
pub mod config;
pub mod core;
pub mod environment;
pub mod form;
pub mod render;
pub mod types;
pub mod utils;
pub mod web;

pub use config::ClientConfig;
pub use environment::ServerSettings;
pub use form::{AnalysisForm, CandidateDocument, RequestStatus, SubmitOutcome};
pub use types::{AnalysisResult, ScoreTier};
pub use web::{build_rocket, start_web_server};
