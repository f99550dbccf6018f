use gloo_net::http::Request;
use thiserror::Error;

use crate::model::{Draft, MonthlyReport, Transaction};

/// Backend base address, fixed at build time.
const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// The one failure taxonomy the client distinguishes: the request did not
/// succeed. Callers log it and keep the previous state.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with status {0}")]
    Status(u16),
}

pub async fn fetch_transactions() -> Result<Vec<Transaction>, ApiError> {
    let url = format!("{API_BASE_URL}/transactions/");
    let resp = Request::get(&url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

pub async fn fetch_monthly_report(year: i32, month: u32) -> Result<MonthlyReport, ApiError> {
    let url = format!("{API_BASE_URL}/reports/monthly/{year}/{month}");
    let resp = Request::get(&url).send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp.json().await?)
}

/// Creates one transaction from the draft. The response body is ignored
/// beyond success or failure.
pub async fn create_transaction(draft: &Draft) -> Result<(), ApiError> {
    let url = format!("{API_BASE_URL}/transactions/");
    let resp = Request::post(&url).json(draft)?.send().await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

/// Navigation target for the CSV report; the browser handles the download.
pub fn download_url(year: i32, month: u32) -> String {
    format!("{API_BASE_URL}/reports/download/{year}/{month}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_url_is_parameterized_by_year_and_month() {
        assert_eq!(
            download_url(2024, 3),
            format!("{API_BASE_URL}/reports/download/2024/3")
        );
    }
}
