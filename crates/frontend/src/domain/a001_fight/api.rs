use crate::shared::api_utils::{api_url, ApiError};
use contracts::domain::a001_fight::Fight;
use gloo_net::http::Request;

const FIGHTS_PATH: &str = "/api/fights";

/// Fetch every recorded fight from the fights service
pub async fn fetch_fights() -> Result<Vec<Fight>, ApiError> {
    let url = api_url(FIGHTS_PATH);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let data: Vec<Fight> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    Ok(data)
}
