//! Logo source fetching.
//!
//! IO is front-loaded behind the [`LogoFetcher`] seam so the hydration
//! pipeline itself stays pure: the only suspension point in a hydrate call
//! is the fan-out over these fetches. The bundled [`LocalLogoFetcher`]
//! resolves `data:` URLs and filesystem paths; network schemes are left to a
//! caller-supplied implementation.

use anyhow::{Context as _, anyhow};
use base64::Engine as _;
use futures::future::BoxFuture;

use crate::foundation::error::PlacardResult;

/// Asynchronous source of encoded logo bytes.
pub trait LogoFetcher: Send + Sync {
    /// Fetch the encoded image bytes behind a logo URL.
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, PlacardResult<Vec<u8>>>;
}

/// Fetcher for `data:` URLs, `file://` URLs and plain filesystem paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalLogoFetcher;

impl LogoFetcher for LocalLogoFetcher {
    fn fetch<'a>(&'a self, url: &'a str) -> BoxFuture<'a, PlacardResult<Vec<u8>>> {
        Box::pin(async move {
            if let Some(rest) = url.strip_prefix("data:") {
                return decode_data_url(rest);
            }
            let path = url.strip_prefix("file://").unwrap_or(url);
            let bytes = tokio::fs::read(path)
                .await
                .with_context(|| format!("read logo file '{path}'"))?;
            Ok(bytes)
        })
    }
}

fn decode_data_url(rest: &str) -> PlacardResult<Vec<u8>> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("data URL without payload"))?;
    if meta.ends_with(";base64") {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload.trim())
            .context("decode base64 data URL payload")?;
        Ok(bytes)
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}
