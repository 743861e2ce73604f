use crate::types::result::Assessment;

pub fn to_json(assessment: &Assessment) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use crate::types::answers::{AnswerSet, BranchChoice};
    use crate::types::dimension::Dimension;

    #[test]
    fn json_report_uses_wire_field_names() {
        let mut answers = AnswerSet::default();
        for dimension in Dimension::ALL {
            answers.set_ratings(dimension, [2; 3]);
        }
        answers.b1 = Some(BranchChoice::A);
        answers.b2 = Some(BranchChoice::A);

        let rendered =
            to_json(&scoring::assess(&answers)).expect("assessment should serialize");
        assert!(rendered.contains("\"dimensionScores\""));
        assert!(rendered.contains("\"mainRoute\""));
        assert!(rendered.contains("\"isDirect\""));
        assert!(rendered.contains("\"shareText\""));
    }
}
