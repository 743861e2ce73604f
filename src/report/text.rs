use crate::types::result::Assessment;

/// Plain-text rendering: the share card plus a compact score block,
/// suitable for terminals and copy-paste.
pub fn to_text(assessment: &Assessment) -> String {
    let mut output = String::new();

    for (dimension, score) in assessment.dimension_scores.iter() {
        match score {
            Some(score) => output.push_str(&format!("{dimension}: {score:.1}\n")),
            None => output.push_str(&format!("{dimension}: -\n")),
        }
    }
    output.push('\n');
    output.push_str(&assessment.result.share_text);
    output.push('\n');

    output
}
