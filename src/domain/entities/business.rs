//! Business entity holding one (name, location) pair and its simulated metrics.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{AppError, MISSING_FIELDS_MESSAGE};

/// Smallest review count ever generated.
pub const REVIEWS_MIN: i32 = 50;

/// Largest review count ever generated.
pub const REVIEWS_MAX: i32 = 249;

/// Star rating with one fractional digit, stored as tenths.
///
/// Always within `[4.0, 5.0]`. Serializes as a JSON number (`4.3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(i16);

impl Rating {
    pub const MIN: Rating = Rating(40);
    pub const MAX: Rating = Rating(50);

    /// Builds a rating from tenths, clamping into `[4.0, 5.0]`.
    pub fn clamped(tenths: i16) -> Self {
        Rating(tenths.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// Builds a rating from tenths, rejecting values outside `[4.0, 5.0]`.
    pub fn from_tenths(tenths: i16) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&tenths)
            .then_some(Rating(tenths))
    }

    pub fn tenths(self) -> i16 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Natural identity of a business: the exact (name, location) pair.
///
/// Construction rejects blank parts, so holding a key means input was validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BusinessKey {
    name: String,
    location: String,
}

impl BusinessKey {
    /// Creates a key, failing with [`AppError::Validation`] if either part is blank.
    ///
    /// Values are kept verbatim; matching is exact and case-sensitive.
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Result<Self, AppError> {
        let name = name.into();
        let location = location.into();

        if name.trim().is_empty() || location.trim().is_empty() {
            return Err(AppError::bad_request(MISSING_FIELDS_MESSAGE));
        }

        Ok(Self { name, location })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

/// The `{rating, reviews, headline}` triple returned to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub rating: Rating,
    pub reviews: i32,
    pub headline: String,
}

/// A persisted business record.
#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub rating: Rating,
    pub reviews: i32,
    pub headline: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Business {
    /// Returns the identity key of this record.
    pub fn key(&self) -> BusinessKey {
        BusinessKey {
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rating: self.rating,
            reviews: self.reviews,
            headline: self.headline.clone(),
        }
    }
}

/// Input for creating a record. Timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBusiness {
    pub key: BusinessKey,
    pub snapshot: Snapshot,
}

impl NewBusiness {
    pub fn new(key: BusinessKey, snapshot: Snapshot) -> Self {
        Self { key, snapshot }
    }
}

/// Outcome of an insert-if-absent.
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    /// The record did not exist and was inserted.
    Created(Business),
    /// A record with the same key already existed; it is returned untouched.
    Existing(Business),
}

impl Upserted {
    pub fn into_inner(self) -> Business {
        match self {
            Upserted::Created(b) | Upserted::Existing(b) => b,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Upserted::Created(_))
    }
}
