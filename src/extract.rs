//! Header validation producing a [`Principal`].

use crate::error::Rejection;
use crate::headers::{self, HeaderLookup};
use crate::level::AccessLevel;
use crate::principal::Principal;

/// Validates identity headers and builds the request's principal.
///
/// Checks run in a fixed order, and the first failure wins:
///
/// 1. `X-User-Level` must be present and parse as an integer, else
///    [`Rejection::InvalidLevelHeader`].
/// 2. The integer must be a known [`AccessLevel`] rank, else
///    [`Rejection::InvalidLevel`].
/// 3. `X-User-ID`, `X-User-Email` and `X-User-TourOperator` must be
///    non-empty, else [`Rejection::MissingUserInformation`].
///
/// # Examples
///
/// ```
/// use axum::http::{HeaderMap, HeaderValue};
/// use tour_auth::{extract_principal, AccessLevel, Rejection};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("X-User-Level", HeaderValue::from_static("1"));
/// assert_eq!(extract_principal(&headers), Err(Rejection::MissingUserInformation));
///
/// headers.insert("X-User-ID", HeaderValue::from_static("123"));
/// headers.insert("X-User-Email", HeaderValue::from_static("test@email.cl"));
/// headers.insert("X-User-TourOperator", HeaderValue::from_static("andes"));
///
/// let principal = extract_principal(&headers).unwrap();
/// assert_eq!(principal.level(), AccessLevel::TourAdmin);
/// ```
pub fn extract_principal<H>(headers: &H) -> Result<Principal, Rejection>
where
    H: HeaderLookup + ?Sized,
{
    let rank = headers
        .header(headers::USER_LEVEL)
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or(Rejection::InvalidLevelHeader)?;

    let level = AccessLevel::try_from(rank)?;

    Principal::new(
        headers.header(headers::USER_ID).unwrap_or_default(),
        headers.header(headers::USER_EMAIL).unwrap_or_default(),
        headers.header(headers::USER_TOUR_OPERATOR).unwrap_or_default(),
        level,
    )
}
