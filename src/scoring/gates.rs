use crate::types::dimension::Dimension;
use crate::types::result::DimensionScores;
use crate::types::routes::RouteId;

/// A direct route assignment produced by gate matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateOutcome {
    pub main_route: RouteId,
    pub sub_route: Option<RouteId>,
}

struct Gate {
    route: RouteId,
    priority: u8,
}

const GATES: [Gate; 5] = [
    Gate {
        route: RouteId::T5,
        priority: 5,
    },
    Gate {
        route: RouteId::T2,
        priority: 4,
    },
    Gate {
        route: RouteId::T3,
        priority: 3,
    },
    Gate {
        route: RouteId::T4,
        priority: 2,
    },
    Gate {
        route: RouteId::T1,
        priority: 1,
    },
];

fn gate_matches(route: RouteId, scores: &DimensionScores) -> bool {
    let score = |dimension| scores.get_or_zero(dimension);
    match route {
        // The TI threshold of 8 reads like raw weekly hours but is
        // compared against the 0-100 scale score, so in practice any
        // scored TI passes it; kept as-is to match the shipped
        // questionnaire behavior.
        RouteId::T5 => score(Dimension::GO) >= 75.0 && score(Dimension::TI) >= 8.0,
        RouteId::T2 => score(Dimension::AI) >= 70.0 && score(Dimension::TB) >= 50.0,
        RouteId::T3 => score(Dimension::DM) >= 70.0 && score(Dimension::TI) >= 6.0,
        RouteId::T4 => score(Dimension::CC) >= 70.0,
        RouteId::T1 => {
            score(Dimension::TB) < 40.0
                && score(Dimension::TI) <= 6.0
                && score(Dimension::GO) <= 50.0
                && score(Dimension::AI) <= 50.0
        }
    }
}

/// Evaluates all five gate rules against the final dimension scores.
/// Returns the highest-priority match as the main route and the
/// second-highest as the sub route, or `None` when no gate fires and
/// the caller must fall back to weighted ranking.
pub fn check_gates(scores: &DimensionScores) -> Option<GateOutcome> {
    let mut matched: Vec<&Gate> = GATES
        .iter()
        .filter(|gate| gate_matches(gate.route, scores))
        .collect();
    matched.sort_by(|a, b| b.priority.cmp(&a.priority));

    let first = matched.first()?;
    Some(GateOutcome {
        main_route: first.route,
        sub_route: matched.get(1).map(|gate| gate.route),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(Dimension, f32)]) -> DimensionScores {
        let mut scores = DimensionScores::default();
        for &(dimension, value) in entries {
            scores.set(dimension, value);
        }
        scores
    }

    #[test]
    fn no_gate_fires_on_low_scores() {
        let scores = scores(&[
            (Dimension::TB, 45.0),
            (Dimension::LS, 30.0),
            (Dimension::TI, 30.0),
            (Dimension::GO, 40.0),
            (Dimension::AI, 35.0),
            (Dimension::DM, 30.0),
            (Dimension::CC, 30.0),
            (Dimension::CR, 30.0),
        ]);
        assert_eq!(check_gates(&scores), None);
    }

    #[test]
    fn single_match_has_no_sub_route() {
        let scores = scores(&[(Dimension::CC, 72.0), (Dimension::TB, 45.0)]);
        assert_eq!(
            check_gates(&scores),
            Some(GateOutcome {
                main_route: RouteId::T4,
                sub_route: None,
            })
        );
    }

    #[test]
    fn overlapping_matches_rank_by_priority() {
        // T2 (priority 4) and T4 (priority 2) both hold.
        let scores = scores(&[
            (Dimension::AI, 75.0),
            (Dimension::TB, 60.0),
            (Dimension::CC, 80.0),
            (Dimension::TI, 30.0),
        ]);
        assert_eq!(
            check_gates(&scores),
            Some(GateOutcome {
                main_route: RouteId::T2,
                sub_route: Some(RouteId::T4),
            })
        );
    }

    #[test]
    fn t5_outranks_everything_when_matched() {
        let scores = scores(&[
            (Dimension::GO, 80.0),
            (Dimension::TI, 75.0),
            (Dimension::AI, 75.0),
            (Dimension::TB, 60.0),
        ]);
        let outcome = check_gates(&scores).expect("gates should fire");
        assert_eq!(outcome.main_route, RouteId::T5);
        assert_eq!(outcome.sub_route, Some(RouteId::T2));
    }

    #[test]
    fn t5_fires_via_hours_floor_on_the_scaled_ti() {
        // The lowest hours-derived TI score is 10, which already clears
        // the literal threshold of 8: T5 collapses to GO >= 75.
        let scores = scores(&[(Dimension::GO, 80.0), (Dimension::TI, 10.0)]);
        assert_eq!(
            check_gates(&scores).map(|outcome| outcome.main_route),
            Some(RouteId::T5)
        );
    }

    #[test]
    fn t1_catches_the_low_profile() {
        let scores = scores(&[
            (Dimension::TB, 30.0),
            (Dimension::TI, 5.0),
            (Dimension::GO, 40.0),
            (Dimension::AI, 40.0),
        ]);
        assert_eq!(
            check_gates(&scores),
            Some(GateOutcome {
                main_route: RouteId::T1,
                sub_route: None,
            })
        );
    }

    #[test]
    fn missing_scores_count_as_zero() {
        // Empty scores satisfy T1's all-below thresholds and nothing else.
        let outcome = check_gates(&DimensionScores::default()).expect("T1 should fire");
        assert_eq!(outcome.main_route, RouteId::T1);
    }
}
