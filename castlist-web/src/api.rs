use castlist_ui::display_types::CastMember;
use std::collections::HashSet;
use thiserror::Error;

/// Why a cast list refresh failed. The display text is what the gallery shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to load cast list (HTTP {0})")]
    Status(u16),
    #[error("Read error: {0}")]
    Body(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Fetch the cast list from `path`, relative to the current page.
pub async fn fetch_cast(path: &str) -> Result<Vec<CastMember>, FetchError> {
    let url = page_url(path)?;
    let resp = reqwest::get(url)
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?;

    parse_cast(&body)
}

/// Parse a `cast.json` body, keeping source order.
pub fn parse_cast(body: &str) -> Result<Vec<CastMember>, FetchError> {
    let members: Vec<CastMember> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    let mut seen = HashSet::with_capacity(members.len());
    for member in &members {
        if !seen.insert(member.id.as_str()) {
            return Err(FetchError::Parse(format!(
                "duplicate cast member id: {}",
                member.id
            )));
        }
    }

    Ok(members)
}

fn page_url(path: &str) -> Result<reqwest::Url, FetchError> {
    let base = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .ok_or_else(|| FetchError::Network("no page location".to_string()))?;
    join_url(&base, path)
}

fn join_url(base: &str, path: &str) -> Result<reqwest::Url, FetchError> {
    reqwest::Url::parse(base)
        .and_then(|b| b.join(path))
        .map_err(|e| FetchError::Network(format!("invalid URL: {e}")))
}
