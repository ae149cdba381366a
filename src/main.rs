use anyhow::Result;
use tracing::info;

use oj_client::client::{JobClient, render};
use oj_client::models::SubmissionRequest;

/// Jobs endpoint of the local job server.
const JOBS_URL: &str = "http://127.0.0.1:12345/jobs";

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the rendered jobs listing.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let client = JobClient::new(JOBS_URL);
    let request = SubmissionRequest::hello_world();

    info!(url = JOBS_URL, language = %request.language, "Submitting job");
    client.submit(&request)?;

    let jobs = client.fetch()?;
    println!("{}", render(&jobs)?);

    Ok(())
}
