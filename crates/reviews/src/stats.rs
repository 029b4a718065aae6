//! Per-course rating statistics.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Rating, Review};

/// Count of reviews per star value. All five buckets are always present.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RatingDistribution([u32; 5]);

impl RatingDistribution {
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            Rating::MIN..=Rating::MAX => self.0[usize::from(stars - 1)],
            _ => 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    fn record(&mut self, rating: Rating) {
        self.0[usize::from(rating.get() - 1)] += 1;
    }
}

// Serialized as {"1": n, ..., "5": n}.
impl Serialize for RatingDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (idx, count) in self.0.iter().enumerate() {
            map.serialize_entry(&(idx + 1).to_string(), count)?;
        }
        map.end()
    }
}

/// Rating snapshot for one course, recomputed on demand.
#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize)]
pub struct RatingStats {
    pub total_reviews: u32,
    /// Mean rating rounded half-up to one decimal; `0.0` when there are no reviews.
    pub average_rating: f64,
    pub rating_distribution: RatingDistribution,
}

impl RatingStats {
    pub fn empty() -> Self {
        Self {
            total_reviews: 0,
            average_rating: 0.0,
            rating_distribution: RatingDistribution::default(),
        }
    }

    /// Compute statistics over a review set (normally one course's reviews).
    pub fn from_reviews<'a, I>(reviews: I) -> Self
    where
        I: IntoIterator<Item = &'a Review>,
    {
        let mut distribution = RatingDistribution::default();
        let mut total: u64 = 0;
        let mut sum: u64 = 0;
        for review in reviews {
            distribution.record(review.rating);
            total += 1;
            sum += u64::from(review.rating.get());
        }

        if total == 0 {
            return Self::empty();
        }

        Self {
            total_reviews: distribution.total(),
            average_rating: round_half_up_tenths(sum, total),
            rating_distribution: distribution,
        }
    }
}

/// `sum / count` rounded half-up to one decimal, in integer arithmetic so that
/// exact `.x5` ties round the same way on every platform.
fn round_half_up_tenths(sum: u64, count: u64) -> f64 {
    let tenths = (sum * 20 + count) / (count * 2);
    tenths as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{at, review};

    fn with_ratings(ratings: &[u8]) -> Vec<Review> {
        ratings
            .iter()
            .enumerate()
            .map(|(i, r)| review(&format!("r{i}"), "course_001", *r, 0, at(1, 0)))
            .collect()
    }

    #[test]
    fn empty_set_is_all_zero() {
        let stats = RatingStats::from_reviews(&Vec::<Review>::new());
        assert_eq!(stats, RatingStats::empty());
        assert_eq!(stats.average_rating, 0.0);
        for stars in 1..=5 {
            assert_eq!(stats.rating_distribution.count(stars), 0);
        }
    }

    #[test]
    fn five_four_five() {
        let stats = RatingStats::from_reviews(&with_ratings(&[5, 4, 5]));
        assert_eq!(stats.total_reviews, 3);
        assert_eq!(stats.average_rating, 4.7);
        assert_eq!(stats.rating_distribution.count(1), 0);
        assert_eq!(stats.rating_distribution.count(2), 0);
        assert_eq!(stats.rating_distribution.count(3), 0);
        assert_eq!(stats.rating_distribution.count(4), 1);
        assert_eq!(stats.rating_distribution.count(5), 2);
    }

    #[test]
    fn ties_round_half_up() {
        // 5×5 + 15×4 = 85 over 20 reviews = 4.25 exactly.
        let mut ratings = vec![5u8; 5];
        ratings.extend(std::iter::repeat_n(4u8, 15));
        assert_eq!(RatingStats::from_reviews(&with_ratings(&ratings)).average_rating, 4.3);

        // 1×3 + 19×2 = 41 over 20 = 2.05 exactly.
        let mut ratings = vec![3u8];
        ratings.extend(std::iter::repeat_n(2u8, 19));
        assert_eq!(RatingStats::from_reviews(&with_ratings(&ratings)).average_rating, 2.1);

        // Non-tie cases round to the nearest tenth.
        assert_eq!(RatingStats::from_reviews(&with_ratings(&[1, 1, 1, 2, 2, 2])).average_rating, 1.5);
        assert_eq!(RatingStats::from_reviews(&with_ratings(&[4, 5, 5])).average_rating, 4.7);
        assert_eq!(RatingStats::from_reviews(&with_ratings(&[4, 4, 5])).average_rating, 4.3);
    }

    #[test]
    fn distribution_serializes_with_all_keys() {
        let stats = RatingStats::from_reviews(&with_ratings(&[2, 2]));
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(
            json["rating_distribution"],
            serde_json::json!({"1": 0, "2": 2, "3": 0, "4": 0, "5": 0})
        );
        assert_eq!(json["average_rating"], serde_json::json!(2.0));
        assert_eq!(json["total_reviews"], serde_json::json!(2));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: histogram buckets always add up to the review count.
            #[test]
            fn distribution_sums_to_total(ratings in proptest::collection::vec(1u8..=5, 0..200)) {
                let stats = RatingStats::from_reviews(&with_ratings(&ratings));
                prop_assert_eq!(stats.total_reviews as usize, ratings.len());
                prop_assert_eq!(stats.rating_distribution.total(), stats.total_reviews);
            }

            /// Property: the average stays within 0.05 of the exact mean and within the rating scale.
            #[test]
            fn average_is_the_rounded_mean(ratings in proptest::collection::vec(1u8..=5, 1..200)) {
                let stats = RatingStats::from_reviews(&with_ratings(&ratings));
                let exact = ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64;
                prop_assert!((stats.average_rating - exact).abs() <= 0.05 + 1e-9);
                prop_assert!(stats.average_rating >= 1.0 && stats.average_rating <= 5.0);
                let scaled = stats.average_rating * 10.0;
                prop_assert!((scaled - scaled.round()).abs() < 1e-9);
            }
        }
    }
}
