//! Reference Data Fetch

use gloo_net::http::Request;
use planner_core::ReferenceData;

/// Fetch and decode the planner content file
pub async fn fetch_reference_data(url: &str) -> Result<ReferenceData, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", url, e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: HTTP {}", url, response.status()));
    }

    response
        .json::<ReferenceData>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", url, e))
}
