// src/core/mod.rs
//! Client-side service access

pub mod service_client;

pub use service_client::{AnalysisTransport, ServiceClient, SubmitError};
