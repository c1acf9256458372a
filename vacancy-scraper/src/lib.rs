pub mod headhunter;
pub mod superjob;

use reqwest::{Response, StatusCode};
use thiserror::Error;

pub use headhunter::HeadHunter;
pub use superjob::SuperJob;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{url}' failed with status {status}")]
    RequestNotOk { url: String, status: StatusCode },
}

/// Results requested per page unless configured otherwise, the maximum both job boards allow
pub const DEFAULT_PER_PAGE: u32 = 100;

pub(crate) const USER_AGENT: &str = concat!("salary-report/", env!("CARGO_PKG_VERSION"));

pub(crate) fn default_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

/// Turn any non-success response into an error, logging the body the server sent along
pub(crate) async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    let error_body = resp.text().await;
    log::error!(
        "request not successful, status code: {}, url: {}, error resp body: {:?}",
        status,
        url,
        error_body,
    );
    Err(Error::RequestNotOk { url, status })
}
