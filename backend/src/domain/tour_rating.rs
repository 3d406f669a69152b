//! Tour rating aggregate.
//!
//! A rating is keyed by the pair (tour, customer); at most one rating exists
//! per pair. Scores are bounded to [`MIN_SCORE`]..=[`MAX_SCORE`] and comments
//! are limited to [`MAX_COMMENT_LENGTH`] characters.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TourId;

/// Lowest score a customer may give.
pub const MIN_SCORE: i32 = 1;
/// Highest score a customer may give.
pub const MAX_SCORE: i32 = 5;
/// Maximum number of characters in a rating comment.
pub const MAX_COMMENT_LENGTH: usize = 255;

/// Validation errors raised when building rating values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TourRatingValidationError {
    /// Score outside the accepted range.
    #[error("score must be between {min} and {max}, got {value}")]
    ScoreOutOfRange { value: i32, min: i32, max: i32 },
    /// Comment longer than the column allows.
    #[error("comment must be at most {max} characters, got {actual}")]
    CommentTooLong { actual: usize, max: usize },
}

/// Integer identifier of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated rating score.
///
/// # Examples
/// ```
/// use tour_ratings::domain::Score;
///
/// assert!(Score::new(5).is_ok());
/// assert!(Score::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Score(i32);

impl Score {
    /// Validate and wrap a raw score.
    pub fn new(value: i32) -> Result<Self, TourRatingValidationError> {
        if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
            return Err(TourRatingValidationError::ScoreOutOfRange {
                value,
                min: MIN_SCORE,
                max: MAX_SCORE,
            });
        }
        Ok(Self(value))
    }

    /// Raw score value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Score {
    type Error = TourRatingValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i32 {
    fn from(value: Score) -> Self {
        value.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check a comment against [`MAX_COMMENT_LENGTH`].
pub fn validate_comment(comment: &str) -> Result<(), TourRatingValidationError> {
    let actual = comment.chars().count();
    if actual > MAX_COMMENT_LENGTH {
        return Err(TourRatingValidationError::CommentTooLong {
            actual,
            max: MAX_COMMENT_LENGTH,
        });
    }
    Ok(())
}

/// Composite key of a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TourRatingKey {
    pub tour_id: TourId,
    pub customer_id: CustomerId,
}

impl TourRatingKey {
    /// Build a key from its parts.
    #[must_use]
    pub const fn new(tour_id: TourId, customer_id: CustomerId) -> Self {
        Self {
            tour_id,
            customer_id,
        }
    }
}

/// A customer's rating of a tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourRating {
    pub key: TourRatingKey,
    pub score: Score,
    pub comment: Option<String>,
}

impl TourRating {
    /// Build a new rating.
    #[must_use]
    pub fn new(key: TourRatingKey, score: Score, comment: Option<String>) -> Self {
        Self {
            key,
            score,
            comment,
        }
    }

    /// Tour the rating belongs to.
    #[must_use]
    pub fn tour_id(&self) -> TourId {
        self.key.tour_id
    }

    /// Customer who wrote the rating.
    #[must_use]
    pub fn customer_id(&self) -> CustomerId {
        self.key.customer_id
    }
}

/// Arithmetic mean of the scores, or `None` when there are no ratings.
///
/// # Examples
/// ```
/// use tour_ratings::domain::{
///     average_score, CustomerId, Score, TourId, TourRating, TourRatingKey,
/// };
///
/// let rating = |customer, score| {
///     TourRating::new(
///         TourRatingKey::new(TourId::new(1), CustomerId::new(customer)),
///         Score::new(score).expect("valid score"),
///         None,
///     )
/// };
/// assert_eq!(average_score(&[rating(1, 3), rating(2, 5)]), Some(4.0));
/// assert_eq!(average_score(&[]), None);
/// ```
#[must_use]
pub fn average_score(ratings: &[TourRating]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }
    let total: i64 = ratings
        .iter()
        .map(|rating| i64::from(rating.score.value()))
        .sum();
    #[expect(
        clippy::cast_precision_loss,
        reason = "rating counts and score sums stay far below 2^52"
    )]
    let average = total as f64 / ratings.len() as f64;
    Some(average)
}
