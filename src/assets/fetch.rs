use std::time::Duration;

use crate::assets::decode::decode_image;
use crate::foundation::error::{OgError, OgResult};

/// Per-request timeout for avatar and logo downloads.
pub(crate) const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

fn client() -> OgResult<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| OgError::fetch(format!("build http client: {e}")))
}

/// Single GET, no retry. With `require_success`, a non-2xx status is an error; otherwise the
/// body is returned as-is and left for the decoder to reject.
pub(crate) fn fetch_bytes(url: &str, require_success: bool) -> OgResult<Vec<u8>> {
    tracing::debug!(url, "fetching");
    let response = client()?
        .get(url)
        .send()
        .map_err(|e| OgError::fetch(format!("GET {url}: {e}")))?;

    let response = if require_success {
        response
            .error_for_status()
            .map_err(|e| OgError::fetch(format!("GET {url}: {e}")))?
    } else {
        response
    };

    let body = response
        .bytes()
        .map_err(|e| OgError::fetch(format!("read body of {url}: {e}")))?;
    Ok(body.to_vec())
}

/// Fetch and decode a remote image into RGBA8 at its source dimensions.
pub(crate) fn fetch_image(url: &str, require_success: bool) -> OgResult<image::RgbaImage> {
    let bytes = fetch_bytes(url, require_success)?;
    decode_image(&bytes)
}
