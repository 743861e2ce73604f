use crate::types::answers::{AnswerSet, BranchChoice};
use crate::types::dimension::Dimension;
use crate::types::result::{round1, DimensionScores, Score};

const BRANCH_NUDGE: Score = 10.0;

/// Reduces raw 1-5 ratings to 0-100 dimension scores: mean of the three
/// ratings times 25, one decimal. Dimensions without a full triple stay
/// unscored. Branch answers then nudge LS (B1) and AI or CC (B2), a
/// declared weekly-hours figure replaces the question-derived TI score
/// outright, and every present score is clamped to [0, 100].
pub fn compute_dimension_scores(answers: &AnswerSet) -> DimensionScores {
    let mut scores = DimensionScores::default();

    for dimension in Dimension::ALL {
        if let Some(ratings) = answers.ratings(dimension) {
            let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
            let average = sum as Score / 3.0;
            scores.set(dimension, round1(average * 25.0));
        }
    }

    if let (Some(choice), Some(ls)) = (answers.b1, scores.get(Dimension::LS)) {
        let adjusted = match choice {
            BranchChoice::A => ls + BRANCH_NUDGE,
            BranchChoice::B => ls - BRANCH_NUDGE,
        };
        scores.set(Dimension::LS, adjusted);
    }

    match answers.b2 {
        Some(BranchChoice::A) => {
            if let Some(ai) = scores.get(Dimension::AI) {
                scores.set(Dimension::AI, ai + BRANCH_NUDGE);
            }
        }
        Some(BranchChoice::B) => {
            if let Some(cc) = scores.get(Dimension::CC) {
                scores.set(Dimension::CC, cc + BRANCH_NUDGE);
            }
        }
        None => {}
    }

    // Declared hours win over the TI questions, branch adjustments included.
    if let Some(hours) = answers.hours_per_week {
        scores.set(Dimension::TI, ti_from_hours(hours));
    }

    // mean(ratings) * 25 tops out at 125 and a nudge can push past either
    // end, so the range invariant is enforced once, at the end.
    for dimension in Dimension::ALL {
        if let Some(score) = scores.get(dimension) {
            scores.set(dimension, score.clamp(0.0, 100.0));
        }
    }

    scores
}

fn ti_from_hours(hours: f32) -> Score {
    if hours <= 2.0 {
        10.0
    } else if hours <= 5.0 {
        30.0
    } else if hours <= 8.0 {
        60.0
    } else if hours <= 12.0 {
        80.0
    } else {
        100.0
    }
}
