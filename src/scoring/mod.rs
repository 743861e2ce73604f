pub mod dimensions;
pub mod gates;
pub mod weighted;

use crate::explain;
use crate::types::answers::AnswerSet;
use crate::types::result::{Assessment, RouteDecision};

/// Runs one full scoring pass: dimension scores, then the gate rules,
/// then the weighted ranking when no gate fires, then the explanation
/// and share text. Pure and deterministic; identical answers produce
/// identical output.
pub fn assess(answers: &AnswerSet) -> Assessment {
    let scores = dimensions::compute_dimension_scores(answers);

    let result = match gates::check_gates(&scores) {
        Some(outcome) => {
            tracing::debug!(main = %outcome.main_route, "gate matched");
            RouteDecision {
                main_route: outcome.main_route,
                sub_route: outcome.sub_route,
                is_direct: true,
                scores: None,
                explanation: explain::explanation(
                    outcome.main_route,
                    outcome.sub_route,
                    None,
                    &scores,
                ),
                share_text: explain::share_text(outcome.main_route),
            }
        }
        None => {
            let ranking = weighted::rank_routes(&scores);
            tracing::debug!(main = %ranking.main_route, "weighted ranking selected");
            RouteDecision {
                main_route: ranking.main_route,
                sub_route: ranking.sub_route,
                is_direct: false,
                explanation: explain::explanation(
                    ranking.main_route,
                    ranking.sub_route,
                    Some(ranking.scores.get(ranking.main_route)),
                    &scores,
                ),
                share_text: explain::share_text(ranking.main_route),
                scores: Some(ranking.scores),
            }
        }
    };

    Assessment {
        dimension_scores: scores,
        result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answers::BranchChoice;
    use crate::types::dimension::Dimension;
    use crate::types::routes::RouteId;

    fn all_rated(value: u8, b1: BranchChoice, b2: BranchChoice) -> AnswerSet {
        let mut answers = AnswerSet::default();
        for dimension in Dimension::ALL {
            answers.set_ratings(dimension, [value; 3]);
        }
        answers.b1 = Some(b1);
        answers.b2 = Some(b2);
        answers
    }

    #[test]
    fn neutral_profile_gates_out_on_t5() {
        // All 3s put every dimension at 75 (LS 85 after B1=A, CC 85
        // after B2=B); TI rides the 0-100 scale, so T5, T2, T3 and T4
        // all match and priority picks T5 over T2.
        let assessment = assess(&all_rated(3, BranchChoice::A, BranchChoice::B));

        assert_eq!(assessment.dimension_scores.get(Dimension::LS), Some(85.0));
        assert_eq!(assessment.dimension_scores.get(Dimension::CC), Some(85.0));
        assert_eq!(assessment.dimension_scores.get(Dimension::TB), Some(75.0));

        let result = &assessment.result;
        assert!(result.is_direct);
        assert_eq!(result.main_route, RouteId::T5);
        assert_eq!(result.sub_route, Some(RouteId::T2));
        assert_eq!(result.scores, None);
        assert!(result.explanation.contains("direct match"));
    }

    #[test]
    fn low_profile_falls_back_to_weighted_ranking() {
        // All 1s with B1=B, B2=A: TB 25, LS 15, TI 25, GO 25, AI 35,
        // DM 25, CC 25, CR 25. TI=25 blocks T1's gate, so the ranker
        // runs: T2 wins at 36.0 and T3's 27.5 is a decisive 8.5 behind.
        let assessment = assess(&all_rated(1, BranchChoice::B, BranchChoice::A));

        let result = &assessment.result;
        assert!(!result.is_direct);
        assert_eq!(result.main_route, RouteId::T2);
        assert_eq!(result.sub_route, None);

        let scores = result.scores.expect("weighted result should carry scores");
        assert_eq!(scores.t1, 24.0);
        assert_eq!(scores.t2, 36.0);
        assert_eq!(scores.t3, 27.5);
        assert_eq!(scores.t4, 23.5);
        assert_eq!(scores.t5, 26.0);
        assert!(result.explanation.contains("weighted score 36.0"));
    }

    #[test]
    fn hours_override_feeds_the_gates() {
        // Strong goals plus a tiny declared time budget: the override
        // maps 1 hour to TI=10, which still clears T5's threshold of 8.
        let mut answers = all_rated(1, BranchChoice::A, BranchChoice::A);
        answers.set_ratings(Dimension::GO, [4, 4, 4]);
        answers.hours_per_week = Some(1.0);

        let assessment = assess(&answers);
        assert_eq!(assessment.dimension_scores.get(Dimension::TI), Some(10.0));
        assert!(assessment.result.is_direct);
        assert_eq!(assessment.result.main_route, RouteId::T5);
    }

    #[test]
    fn assessment_is_byte_identical_across_runs() {
        let answers = all_rated(2, BranchChoice::A, BranchChoice::B);
        let first = serde_json::to_string(&assess(&answers)).expect("should serialize");
        let second = serde_json::to_string(&assess(&answers)).expect("should serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn incomplete_answers_still_produce_a_total_result() {
        // The core never errors on missing data; completeness gating is
        // the caller's job.
        let mut answers = AnswerSet::default();
        answers.set_ratings(Dimension::CC, [5, 5, 5]);

        let assessment = assess(&answers);
        assert_eq!(assessment.dimension_scores.get(Dimension::TB), None);
        assert!(assessment.result.is_direct);
        assert_eq!(assessment.result.main_route, RouteId::T4);
    }
}
