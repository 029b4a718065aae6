//! Review ordering.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use learnhub_core::DomainError;

use crate::Review;

/// Supported review orderings. Every ordering is stable.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    RatingHigh,
    RatingLow,
    #[default]
    DateNew,
    DateOld,
    Helpful,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::RatingHigh,
        SortKey::RatingLow,
        SortKey::DateNew,
        SortKey::DateOld,
        SortKey::Helpful,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::RatingHigh => "rating_high",
            SortKey::RatingLow => "rating_low",
            SortKey::DateNew => "date_new",
            SortKey::DateOld => "date_old",
            SortKey::Helpful => "helpful",
        }
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::invalid_argument(format!("unknown sort key '{s}'")))
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return a copy of `reviews` ordered by `key`. Equal elements keep their
/// relative input order.
pub fn sort_reviews(reviews: &[Review], key: SortKey) -> Vec<Review> {
    let mut sorted = reviews.to_vec();
    match key {
        SortKey::RatingHigh => sorted.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortKey::RatingLow => sorted.sort_by(|a, b| a.rating.cmp(&b.rating)),
        SortKey::DateNew => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::DateOld => sorted.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::Helpful => sorted.sort_by(|a, b| b.helpful_count.cmp(&a.helpful_count)),
    }
    sorted
}

/// Order by a raw key string. Unrecognized keys leave the input order as is.
pub fn order_reviews(reviews: &[Review], key: &str) -> Vec<Review> {
    match key.parse::<SortKey>() {
        Ok(key) => sort_reviews(reviews, key),
        Err(_) => reviews.to_vec(),
    }
}
