//! Network half of the catalog loader.

use games_gallery::{Catalog, LoadError, parse_catalog};
use gloo::net::http::Request;
use web_sys::RequestCache;

/// Fetch and parse the catalog with HTTP caching disabled.
///
/// A non-success status is an error; a JSON body that is not an array is
/// an empty catalog.
pub async fn fetch_catalog(url: &str) -> Result<Catalog, LoadError> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::Fetch {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| LoadError::Network(e.to_string()))?;
    parse_catalog(&body)
}
