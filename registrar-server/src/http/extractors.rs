//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::PageError;

/// Optional minus sign followed by ASCII digits, nothing else.
fn is_plain_integer(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Extract and validate an integer record ID from the path.
///
/// A segment that is not an integer is answered with the not-found page
/// before the handler runs.
pub struct RecordId(pub i64);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| PageError::NotFound {
                resource: "record",
                id: String::new(),
            })?;

        if !is_plain_integer(&raw) {
            return Err(PageError::NotFound {
                resource: "record",
                id: raw,
            });
        }

        raw.parse::<i64>().map(Self).map_err(|_| PageError::NotFound {
            resource: "record",
            id: raw,
        })
    }
}
