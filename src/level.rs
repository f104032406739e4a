//! Access levels carried in the `X-User-Level` header.
//!
//! Levels form a closed, ranked set. Rank 0 is the most privileged
//! ([`AccessLevel::TopAdmin`]) and rank 5 the least ([`AccessLevel::Guide`]).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::Rejection;

/// Role tag of an authenticated principal.
///
/// Declaration order is rank order, so the derived `Ord` sorts from most to
/// least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessLevel {
    /// Platform-wide administrator. Satisfies every role check.
    TopAdmin = 0,
    /// Administrator of a single tour operator.
    TourAdmin = 1,
    /// Sells tours on behalf of an operator.
    TourSeller = 2,
    /// Runs day-to-day operations.
    Operator = 3,
    /// Drives tour vehicles.
    Driver = 4,
    /// Guides tours.
    Guide = 5,
}

impl AccessLevel {
    /// Every level, in rank order.
    pub const ALL: [AccessLevel; 6] = [
        AccessLevel::TopAdmin,
        AccessLevel::TourAdmin,
        AccessLevel::TourSeller,
        AccessLevel::Operator,
        AccessLevel::Driver,
        AccessLevel::Guide,
    ];

    /// The most privileged level.
    pub const MIN: AccessLevel = AccessLevel::TopAdmin;

    /// The least privileged level.
    pub const MAX: AccessLevel = AccessLevel::Guide;

    /// Returns the ordinal position of this level.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Looks up the level with the given rank.
    ///
    /// Returns `None` outside `MIN.rank()..=MAX.rank()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_auth::AccessLevel;
    ///
    /// assert_eq!(AccessLevel::from_rank(1), Some(AccessLevel::TourAdmin));
    /// assert_eq!(AccessLevel::from_rank(6), None);
    /// assert_eq!(AccessLevel::from_rank(-1), None);
    /// ```
    pub fn from_rank(rank: i64) -> Option<Self> {
        if rank < i64::from(Self::MIN.rank()) || rank > i64::from(Self::MAX.rank()) {
            return None;
        }
        usize::try_from(rank)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Stable name used in logs.
    pub fn display_name(self) -> &'static str {
        match self {
            AccessLevel::TopAdmin => "TopAdmin",
            AccessLevel::TourAdmin => "TourAdmin",
            AccessLevel::TourSeller => "TourSeller",
            AccessLevel::Operator => "Operator",
            AccessLevel::Driver => "Driver",
            AccessLevel::Guide => "Guide",
        }
    }

    /// Display name for a raw rank, `"Unknown"` when out of range.
    ///
    /// For display only. Validation goes through [`AccessLevel::from_rank`]
    /// or `TryFrom<i64>`, which reject instead of falling back.
    pub fn display_name_for_rank(rank: i64) -> &'static str {
        Self::from_rank(rank).map_or("Unknown", Self::display_name)
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<i64> for AccessLevel {
    type Error = Rejection;

    fn try_from(rank: i64) -> Result<Self, Self::Error> {
        Self::from_rank(rank).ok_or(Rejection::InvalidLevel { level: rank })
    }
}

/// Serialized as the numeric rank, the same value the header carries.
impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.rank())
    }
}
