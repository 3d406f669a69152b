//! Tour identity.
//!
//! Tours are owned by another part of the catalogue; ratings only need to
//! know whether one exists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Integer identifier of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TourId(i32);

impl TourId {
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

impl fmt::Display for TourId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TourId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// A tour that can be rated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    id: TourId,
    title: String,
}

impl Tour {
    /// Build a new [`Tour`].
    pub fn new(id: TourId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    /// Tour identifier.
    #[must_use]
    pub fn id(&self) -> TourId {
        self.id
    }

    /// Tour title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
}
