use serde::Serialize;

use crate::error::Rejection;
use crate::level::AccessLevel;

/// The calling user, as asserted by the upstream gateway.
///
/// A `Principal` only exists for one request. It can only be built through
/// [`Principal::new`], which refuses empty fields, so holding one means every
/// field was present.
///
/// # Examples
///
/// ```
/// use tour_auth::{AccessLevel, Principal};
///
/// let seller = Principal::new("42", "ana@tours.cl", "andes", AccessLevel::TourSeller)
///     .expect("all fields present");
///
/// assert!(!seller.is_administrator());
/// assert!(seller.has_role(AccessLevel::TourSeller));
/// assert!(!seller.has_role(AccessLevel::Guide));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    id: String,
    email: String,
    tour_operator: String,
    level: AccessLevel,
}

impl Principal {
    /// Builds a principal from already-read header values.
    ///
    /// # Errors
    ///
    /// Returns [`Rejection::MissingUserInformation`] if `id`, `email` or
    /// `tour_operator` is empty. Values are taken verbatim; whitespace is not
    /// trimmed.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        tour_operator: impl Into<String>,
        level: AccessLevel,
    ) -> Result<Self, Rejection> {
        let principal = Self {
            id: id.into(),
            email: email.into(),
            tour_operator: tour_operator.into(),
            level,
        };

        if principal.id.is_empty() || principal.email.is_empty() || principal.tour_operator.is_empty()
        {
            return Err(Rejection::MissingUserInformation);
        }

        Ok(principal)
    }

    /// User identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// User email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Tour operator the user belongs to.
    pub fn tour_operator(&self) -> &str {
        &self.tour_operator
    }

    /// Access level.
    pub fn level(&self) -> AccessLevel {
        self.level
    }

    /// Returns `true` for [`AccessLevel::TopAdmin`].
    pub fn is_administrator(&self) -> bool {
        self.level == AccessLevel::TopAdmin
    }

    /// Returns `true` if the principal is an administrator or holds exactly
    /// `required`.
    ///
    /// This is an exact match, not a rank comparison: a `TourAdmin` does not
    /// satisfy a check for `Operator`.
    pub fn has_role(&self, required: AccessLevel) -> bool {
        self.is_administrator() || self.level == required
    }
}
