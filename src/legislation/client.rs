// src/legislation/client.rs
use std::time::Duration;

use reqwest::header;

use crate::legislation::models::ActReference;
use crate::utils::error::LegislationError;

const USER_AGENT: &str = "act-analyzer/0.1 (legislative text analysis)";
// legislation.gov.uk asks clients to stay well below burst rates.
const REQUEST_DELAY_MS: u64 = 250;

/// Creates a reqwest client configured for legislation.gov.uk interaction.
fn build_client() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(60))
        .build()
}

/// Downloads the PDF rendering of an Act from legislation.gov.uk.
pub async fn download_act_pdf(act: &ActReference) -> Result<Vec<u8>, LegislationError> {
    let client = build_client()?;
    let url = act.pdf_url();
    tracing::info!("Downloading Act document from: {}", url);

    tokio::time::sleep(Duration::from_millis(REQUEST_DELAY_MS)).await;

    let response = client
        .get(&url)
        .header(header::ACCEPT, "application/pdf,*/*")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LegislationError::DocNotFound(url));
        }
        return Err(LegislationError::Http(status));
    }

    let body = response.bytes().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);
    Ok(body.to_vec())
}
