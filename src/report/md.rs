use crate::types::result::Assessment;

pub fn to_markdown(assessment: &Assessment) -> String {
    let mut output = String::new();
    output.push_str("# Assessment Result\n\n");

    output.push_str("## Dimension Scores\n\n");
    for (dimension, score) in assessment.dimension_scores.iter() {
        match score {
            Some(score) => output.push_str(&format!(
                "- {} ({}): {:.1}\n",
                dimension.display_name(),
                dimension,
                score
            )),
            None => output.push_str(&format!(
                "- {} ({}): unanswered\n",
                dimension.display_name(),
                dimension
            )),
        }
    }
    output.push('\n');

    let result = &assessment.result;
    let main = result.main_route.template();
    output.push_str("## Recommended Route\n\n");
    output.push_str(&format!("**{}** ({})\n\n{}\n\n", main.name, main.id, main.description));

    if let Some(sub) = result.sub_route {
        let template = sub.template();
        output.push_str(&format!(
            "Secondary route: **{}** ({})\n\n",
            template.name, template.id
        ));
    }

    if let Some(scores) = &result.scores {
        output.push_str("## Route Scores\n\n");
        output.push_str(&format!(
            "- T1: {:.1}\n- T2: {:.1}\n- T3: {:.1}\n- T4: {:.1}\n- T5: {:.1}\n\n",
            scores.t1, scores.t2, scores.t3, scores.t4, scores.t5
        ));
    }

    output.push_str(&format!("{}\n\n", result.explanation));

    output.push_str("## 7-Day Checklist\n\n");
    for item in &main.checklist {
        output.push_str(&format!("- [ ] {item}\n"));
    }
    output.push('\n');

    output.push_str("## Maxims\n\n");
    for maxim in &main.maxims {
        output.push_str(&format!("> {maxim}\n"));
    }
    output.push('\n');

    output.push_str("## Share\n\n```\n");
    output.push_str(&result.share_text);
    output.push_str("\n```\n");

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use crate::types::answers::{AnswerSet, BranchChoice};
    use crate::types::dimension::Dimension;

    #[test]
    fn markdown_report_contains_sections() {
        let mut answers = AnswerSet::default();
        for dimension in Dimension::ALL {
            answers.set_ratings(dimension, [3; 3]);
        }
        answers.b1 = Some(BranchChoice::A);
        answers.b2 = Some(BranchChoice::B);

        let rendered = to_markdown(&scoring::assess(&answers));
        assert!(rendered.contains("# Assessment Result"));
        assert!(rendered.contains("## Dimension Scores"));
        assert!(rendered.contains("## Recommended Route"));
        assert!(rendered.contains("## 7-Day Checklist"));
        assert!(rendered.contains("## Share"));
    }

    #[test]
    fn weighted_result_lists_route_scores() {
        let mut answers = AnswerSet::default();
        for dimension in Dimension::ALL {
            answers.set_ratings(dimension, [1; 3]);
        }
        answers.b1 = Some(BranchChoice::B);
        answers.b2 = Some(BranchChoice::A);

        let rendered = to_markdown(&scoring::assess(&answers));
        assert!(rendered.contains("## Route Scores"));
        assert!(rendered.contains("- T2: 36.0"));
    }
}
