pub mod client;
pub mod models;

pub use client::JobClient;
pub use models::SubmissionRequest;
