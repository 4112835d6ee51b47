//! Menu popularity policies
//!
//! Two deliberately distinct rules ship today and are tied to their
//! endpoints. `/storemenus` tags by rank among a store's menus; `/menuinfo`
//! tags by an absolute review-count threshold. They disagree on purpose
//! (a menu with 2 reviews can rank top-2 yet miss the threshold) and must
//! not be unified without product sign-off.

/// Tag value for a popular menu
pub const POPULAR: &str = "popular";

/// Rank-based policy for the store menu listing: the two most-reviewed
/// menus of a store are popular. `ranking` is 1-based.
pub fn rank_based(ranking: i64) -> &'static str {
    if ranking <= 2 { POPULAR } else { "" }
}

/// Threshold policy for the single-menu view: popular when the menu has
/// strictly more than 2 active reviews.
pub fn review_threshold(review_count: i64) -> &'static str {
    if review_count > 2 { POPULAR } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_two_ranks_are_popular() {
        assert_eq!(rank_based(1), POPULAR);
        assert_eq!(rank_based(2), POPULAR);
        assert_eq!(rank_based(3), "");
        assert_eq!(rank_based(4), "");
    }

    #[test]
    fn threshold_is_strictly_greater_than_two() {
        assert_eq!(review_threshold(3), POPULAR);
        assert_eq!(review_threshold(2), "");
        assert_eq!(review_threshold(0), "");
    }
}
