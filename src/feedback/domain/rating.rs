//! Employee satisfaction rating.

use super::FeedbackDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, num::FpCategory};

/// Rating from 0 to 5, where 0 means not yet rated.
///
/// Submitted ratings may be fractional, such as `4.5`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

// Every constructor rejects NaN and infinities.
impl Eq for Rating {}

impl Rating {
    /// Placeholder rating of a pending feedback record.
    pub const UNRATED: Self = Self(0.0);
    /// Lowest rating an employee may submit.
    pub const MIN: f64 = 1.0;
    /// Highest rating an employee may submit.
    pub const MAX: f64 = 5.0;

    /// Creates a submitted rating.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackDomainError::InvalidRating`] for a non-finite value
    /// or one outside [`Self::MIN`]..=[`Self::MAX`].
    pub fn submitted(value: f64) -> Result<Self, FeedbackDomainError> {
        if value.is_finite() && (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FeedbackDomainError::InvalidRating(value.to_string()))
        }
    }

    /// Parses a rating submitted through a form.
    ///
    /// Numbers and numeric strings are accepted, fractional ones included;
    /// non-numeric strings and other JSON values are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`FeedbackDomainError::InvalidRating`] when the input is not
    /// a number from 1 to 5.
    pub fn from_input(value: &Value) -> Result<Self, FeedbackDomainError> {
        let invalid = || FeedbackDomainError::InvalidRating(value.to_string());
        let raw = match value {
            Value::Number(number) => number.as_f64().ok_or_else(invalid)?,
            Value::String(text) => text.trim().parse::<f64>().map_err(|_| invalid())?,
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => {
                return Err(invalid());
            }
        };
        Self::submitted(raw).map_err(|_| invalid())
    }

    /// Returns the numeric rating.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns whether no rating has been submitted.
    #[must_use]
    pub const fn is_unrated(self) -> bool {
        matches!(self.0.classify(), FpCategory::Zero)
    }
}

impl TryFrom<f64> for Rating {
    type Error = FeedbackDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.classify() == FpCategory::Zero {
            return Ok(Self::UNRATED);
        }
        Self::submitted(value)
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
