use serde::{Deserialize, Serialize};

/// A code submission sent to the job server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Source code content
    pub source_code: String,
    /// Programming language (e.g., "Rust")
    pub language: String,
    /// ID of the submitting user
    pub user_id: i32,
    /// Contest ID this submission belongs to
    pub contest_id: i32,
    /// ID of the problem being solved
    pub problem_id: i32,
}

impl SubmissionRequest {
    /// The fixed hello-world payload used for the smoke test.
    pub fn hello_world() -> Self {
        Self {
            source_code: "fn main() { println!(\"Hello, world!\"); }".to_string(),
            language: "Rust".to_string(),
            user_id: 0,
            contest_id: 0,
            problem_id: 0,
        }
    }
}
