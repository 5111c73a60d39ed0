//! Reduces a page's candidates to three winners: cheapest, highest-rated,
//! and soonest-arriving.

use crate::amazon::models::{
    DeliveryEstimate, DeliveryPick, PricedPick, ProductCandidate, RankingResult, RatedPick,
};
use crate::delivery;
use chrono::NaiveDateTime;
use tracing::{debug, trace};

/// Picks the three winners from candidates in page order.
///
/// The three reductions are independent: a candidate missing a price is still
/// eligible for the rating and delivery picks. Replacement is always strict
/// (`<` on price, `>` on rating, strictly-sooner estimate), so the
/// first-encountered candidate keeps a tie.
pub fn rank(candidates: &[ProductCandidate], now: NaiveDateTime) -> RankingResult {
    let mut cheapest: Option<PricedPick> = None;
    let mut lowest_price = f64::INFINITY;

    let mut highest_rated: Option<RatedPick> = None;
    // Seeded above zero means an unrated product and a genuine 0.0 rating are
    // treated the same: neither can win.
    let mut highest_rating = 0.0_f32;

    let mut soonest: Option<DeliveryPick> = None;

    for candidate in candidates {
        if let Some(price) = candidate.price {
            if price < lowest_price {
                lowest_price = price;
                cheapest = Some(PricedPick {
                    title: candidate.title.clone(),
                    url: candidate.url.clone(),
                    price,
                });
            }
        }

        if let Some(rating) = candidate.rating {
            if rating > highest_rating {
                highest_rating = rating;
                highest_rated = Some(RatedPick {
                    title: candidate.title.clone(),
                    url: candidate.url.clone(),
                    rating,
                });
            }
        }

        if let Some(estimate) = best_estimate(candidate, now) {
            let sooner = soonest.as_ref().is_none_or(|current| estimate < current.estimate);
            if sooner {
                soonest = Some(DeliveryPick {
                    title: candidate.title.clone(),
                    url: candidate.url.clone(),
                    estimate,
                });
            }
        }
    }

    debug!(
        "Ranked {} candidates (cheapest: {}, rated: {}, soonest: {})",
        candidates.len(),
        cheapest.is_some(),
        highest_rated.is_some(),
        soonest.is_some()
    );

    RankingResult { cheapest, highest_rated, soonest }
}

/// Resolves a candidate's best delivery estimate from its snippets.
///
/// Snippets are scanned in document order; ones that fail to normalize are
/// skipped without affecting the rest. Returns `None` when no snippet yields
/// a date.
pub fn best_estimate(
    candidate: &ProductCandidate,
    now: NaiveDateTime,
) -> Option<DeliveryEstimate> {
    let mut best: Option<DeliveryEstimate> = None;

    for snippet in &candidate.delivery_snippets {
        match delivery::normalize(snippet, now) {
            Some(estimate) => {
                if best.is_none_or(|b| estimate < b) {
                    best = Some(estimate);
                }
            }
            None => trace!("Skipping unparseable delivery snippet: {:?}", snippet),
        }
    }

    best
}
