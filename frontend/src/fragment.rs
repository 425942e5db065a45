use gloo_net::http::Request;
use log::error;

use crate::config;
use crate::route::PageId;

/// Shown in place of any page that could not be fetched.
pub const FALLBACK_FRAGMENT: &str = "<div class=\"container\"><h2>Page not found</h2><p>Sorry, the requested page could not be loaded.</p></div>";

#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    #[error("server answered {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not read body: {0}")]
    Body(String),
}

pub fn fragment_url(page: &PageId) -> String {
    format!("{}/{}.html", config::pages_dir(), page)
}

/// Fetches the markup for `page`. Never fails: any error is logged and the
/// fallback fragment is returned instead. Nothing is cached.
pub async fn load(page: &PageId) -> String {
    settle(page, fetch(page).await)
}

async fn fetch(page: &PageId) -> Result<String, FragmentError> {
    let response = Request::get(&fragment_url(page))
        .send()
        .await
        .map_err(|e| FragmentError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FragmentError::Status(response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| FragmentError::Body(e.to_string()))
}

pub fn settle(page: &PageId, outcome: Result<String, FragmentError>) -> String {
    match outcome {
        Ok(html) => html,
        Err(e) => {
            error!("Error loading page {}: {}", page, e);
            FALLBACK_FRAGMENT.to_string()
        }
    }
}
