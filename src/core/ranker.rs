use crate::models::{Listing, UserProfile, ScoredMatch, ScoringWeights};
use crate::core::scoring::score_listing;

/// Lowest score a listing needs to be recommended
pub const MIN_SCORE: i32 = 15;

/// Maximum number of recommendations returned per request
pub const TOP_K: usize = 5;

/// Result of ranking a catalog
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<ScoredMatch>,
    pub total_listings: usize,
    /// Listings that cleared the threshold before the limit was applied
    pub qualified: usize,
}

/// Ranks catalog listings for a profile
///
/// # Pipeline Stages
/// 1. Score every listing
/// 2. Drop listings below the threshold
/// 3. Sort by score, ties in catalog order
/// 4. Keep the top `limit`
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
    min_score: i32,
    limit: usize,
}

impl Ranker {
    pub fn new(weights: ScoringWeights, min_score: i32, limit: usize) -> Self {
        Self {
            weights,
            min_score,
            limit,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), MIN_SCORE, TOP_K)
    }

    /// Rank listings for a user
    ///
    /// # Arguments
    /// * `profile` - The user's submitted preferences
    /// * `listings` - The full catalog, in catalog order
    ///
    /// # Returns
    /// RankResult containing at most `limit` matches, best first
    pub fn rank(&self, profile: &UserProfile, listings: &[Listing]) -> RankResult {
        let total_listings = listings.len();

        let mut scored: Vec<(usize, ScoredMatch)> = listings
            .iter()
            .enumerate()
            .filter_map(|(index, listing)| {
                let result = score_listing(profile, listing, &self.weights);

                if result.score >= self.min_score {
                    Some((
                        index,
                        ScoredMatch {
                            listing: listing.clone(),
                            score: result.score,
                            reasons: result.reasons,
                        },
                    ))
                } else {
                    None
                }
            })
            .collect();

        let qualified = scored.len();

        // Sort by score (descending) and then by catalog position (ascending)
        scored.sort_by(|(ia, a), (ib, b)| b.score.cmp(&a.score).then_with(|| ia.cmp(ib)));
        scored.truncate(self.limit);

        RankResult {
            matches: scored.into_iter().map(|(_, m)| m).collect(),
            total_listings,
            qualified,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
