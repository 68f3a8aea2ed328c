//! Remote API frontend.
//!
//! Authenticates as a superuser (or reuses a token) and pages through
//! `GET /api/collections`.

use serde::Deserialize;

use super::raw::{self, RawCollection, RawCollectionPage};
use super::SchemaSource;
use crate::config::RemoteAuth;
use crate::diagnostic::CompilerError;
use crate::ir::CollectionDefinition;

/// Collections requested per page.
const PAGE_SIZE: u32 = 200;

/// Reads collections from a running backend.
pub struct RemoteSource {
    base_url: String,
    auth: RemoteAuth,
}

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

impl RemoteSource {
    pub fn new(url: impl Into<String>, auth: RemoteAuth) -> Self {
        let url = url.into();
        Self {
            base_url: url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    /// Endpoint for the superuser password login.
    pub fn auth_url(&self) -> String {
        format!("{}/api/collections/_superusers/auth-with-password", self.base_url)
    }

    /// Endpoint for one page of the collection list.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}/api/collections?page={}&perPage={}", self.base_url, page, PAGE_SIZE)
    }

    fn token(&self) -> Result<String, CompilerError> {
        let (email, password) = match &self.auth {
            RemoteAuth::Token(token) => return Ok(token.clone()),
            RemoteAuth::Password { email, password } => (email, password),
        };

        let url = self.auth_url();
        let mut response = ureq::post(url.as_str())
            .send_json(serde_json::json!({ "identity": email, "password": password }))
            .map_err(|e| CompilerError::Authentication {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let body: AuthResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| CompilerError::Authentication {
                url: url.clone(),
                message: format!("unexpected response: {}", e),
            })?;

        Ok(body.token)
    }

    fn fetch_page(&self, token: &str, page: u32) -> Result<RawCollectionPage, CompilerError> {
        let url = self.page_url(page);
        let mut response = ureq::get(url.as_str())
            .header("Authorization", token)
            .call()
            .map_err(|e| CompilerError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let text = response
            .body_mut()
            .read_to_string()
            .map_err(|e| CompilerError::Http {
                url: url.clone(),
                message: e.to_string(),
            })?;

        serde_json::from_str(&text).map_err(|e| CompilerError::Http {
            url,
            message: format!("unexpected response: {}", e),
        })
    }
}

impl SchemaSource for RemoteSource {
    fn kind(&self) -> &str {
        "remote"
    }

    fn location(&self) -> String {
        self.base_url.clone()
    }

    fn load(&mut self) -> Result<Vec<CollectionDefinition>, CompilerError> {
        let token = self.token()?;
        let collections = collect_pages(|page| self.fetch_page(&token, page))?;
        raw::into_ir(collections)
    }
}

/// Fetches pages `1..` and concatenates their items.
///
/// Stops after the page reported as last, or at the first empty page.
fn collect_pages<F>(mut fetch: F) -> Result<Vec<RawCollection>, CompilerError>
where
    F: FnMut(u32) -> Result<RawCollectionPage, CompilerError>,
{
    let mut collections = Vec::new();
    let mut page = 1;
    loop {
        let result = fetch(page)?;
        tracing::debug!(page, total_pages = result.total_pages, items = result.items.len(), "fetched collections page");
        let last = result.items.is_empty() || page >= result.total_pages;
        collections.extend(result.items);
        if last {
            return Ok(collections);
        }
        page += 1;
    }
}
