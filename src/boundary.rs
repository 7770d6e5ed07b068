//! Indonesia province boundary GeoJSON fetch. One blocking GET, response body
//! written verbatim (bytes, not re-encoded text) so the GeoJSON survives
//! untouched for map consumers. No retry: a failed fetch is reported and the
//! harvest carries on without a boundary file.

use std::fmt;
use std::fs;
use std::path::Path;

pub const DEFAULT_BOUNDARY_URL: &str =
    "https://raw.githubusercontent.com/superpikar/indonesia-geojson/master/indonesia.geojson";

pub const BOUNDARY_FILE_NAME: &str = "indonesia.geojson";

/// What a completed (non-erroring) fetch did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Success status; body written to the destination path.
    Saved { bytes: usize },
    /// Non-success status; nothing written.
    Rejected { status: u16 },
}

#[derive(Debug)]
pub enum BoundaryError {
    Request(reqwest::Error),
    Write(std::io::Error),
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(err) => write!(f, "boundary request failed: {err}"),
            Self::Write(err) => write!(f, "failed to write boundary file: {err}"),
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Fetch the boundary file to `dest`. A non-success HTTP status is not an
/// error here; it comes back as `Rejected` so the caller can log the code.
pub fn fetch_boundary(
    client: &reqwest::blocking::Client,
    url: &str,
    dest: &Path,
) -> Result<FetchOutcome, BoundaryError> {
    let response = client.get(url).send().map_err(BoundaryError::Request)?;
    let status = response.status();
    if !status.is_success() {
        return Ok(FetchOutcome::Rejected {
            status: status.as_u16(),
        });
    }
    let body = response.bytes().map_err(BoundaryError::Request)?;
    fs::write(dest, &body).map_err(BoundaryError::Write)?;
    Ok(FetchOutcome::Saved { bytes: body.len() })
}
