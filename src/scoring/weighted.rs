use crate::types::dimension::Dimension;
use crate::types::result::{round1, DimensionScores, RouteScores, Score};
use crate::types::routes::RouteId;

/// A second route is only reported when it trails the winner by less
/// than this many points; a wider margin is considered decisive.
const SUB_ROUTE_MARGIN: Score = 8.0;

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedRanking {
    pub scores: RouteScores,
    pub main_route: RouteId,
    pub sub_route: Option<RouteId>,
}

/// Percentage weights per route, in `Dimension::ALL` order
/// (TB, LS, TI, GO, AI, DM, CC, CR). Rows deliberately do not sum to
/// 100; they are applied as direct multipliers, not renormalized.
fn weights(route: RouteId) -> [Score; 8] {
    match route {
        RouteId::T1 => [15.0, 20.0, 15.0, 15.0, 10.0, 5.0, 10.0, 10.0],
        RouteId::T2 => [25.0, 20.0, 20.0, 15.0, 30.0, 10.0, 0.0, 20.0],
        RouteId::T3 => [20.0, 10.0, 15.0, 20.0, 10.0, 30.0, 0.0, 5.0],
        RouteId::T4 => [10.0, 20.0, 10.0, 15.0, 5.0, 0.0, 35.0, 5.0],
        RouteId::T5 => [15.0, 0.0, 20.0, 35.0, 10.0, 10.0, 0.0, 10.0],
    }
}

fn route_score(route: RouteId, scores: &DimensionScores) -> Score {
    let weights = weights(route);
    let total: Score = Dimension::ALL
        .iter()
        .zip(weights.iter())
        .map(|(&dimension, &weight)| scores.get_or_zero(dimension) * weight / 100.0)
        .sum();
    round1(total)
}

/// Fallback when no gate fires: rank all five routes by their weighted
/// linear combination of dimension scores. Unscored dimensions
/// contribute zero rather than failing the computation.
pub fn rank_routes(scores: &DimensionScores) -> WeightedRanking {
    let route_scores = RouteScores {
        t1: route_score(RouteId::T1, scores),
        t2: route_score(RouteId::T2, scores),
        t3: route_score(RouteId::T3, scores),
        t4: route_score(RouteId::T4, scores),
        t5: route_score(RouteId::T5, scores),
    };

    let mut ranked: Vec<(RouteId, Score)> = RouteId::ALL
        .iter()
        .map(|&route| (route, route_scores.get(route)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (main_route, best) = ranked[0];
    let sub_route = match ranked[1] {
        (route, second) if best - second < SUB_ROUTE_MARGIN => Some(route),
        _ => None,
    };

    WeightedRanking {
        scores: route_scores,
        main_route,
        sub_route,
    }
}
