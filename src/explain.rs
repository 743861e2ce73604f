use crate::types::result::{DimensionScores, Score};
use crate::types::routes::RouteId;

/// Dimensions scoring below this are called out as areas to improve.
const WEAK_THRESHOLD: Score = 40.0;

/// How many checklist items the share card previews.
const SHARE_PREVIEW_ITEMS: usize = 3;

/// Builds the human-readable result explanation: the main route, how it
/// was selected, the secondary route when present, and a call-out of
/// weak dimensions in declaration order.
pub fn explanation(
    main_route: RouteId,
    sub_route: Option<RouteId>,
    weighted_score: Option<Score>,
    scores: &DimensionScores,
) -> String {
    let mut text = format!(
        "Your assessment points to **{}**",
        main_route.template().name
    );
    match weighted_score {
        None => text.push_str(" (direct match: the gate conditions are satisfied)."),
        Some(score) => text.push_str(&format!(" (weighted score {score:.1}).")),
    }

    if let Some(sub) = sub_route {
        text.push_str(&format!(
            " **{}** also fits you well as a secondary direction.",
            sub.template().name
        ));
    }

    let weak: Vec<&str> = scores
        .iter()
        .filter(|(_, score)| score.is_some_and(|s| s < WEAK_THRESHOLD))
        .map(|(dimension, _)| dimension.display_name())
        .collect();
    if !weak.is_empty() {
        text.push_str(&format!("\n\nAreas to improve: {}.", weak.join(", ")));
    }

    text
}

/// Fixed share-card template: title, route name and description, the
/// first three checklist items, an ellipsis, and a call-to-action.
pub fn share_text(main_route: RouteId) -> String {
    let template = main_route.template();
    let preview = template
        .checklist
        .iter()
        .take(SHARE_PREVIEW_ITEMS)
        .enumerate()
        .map(|(idx, item)| format!("{}. {}", idx + 1, item))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\u{1F916} I just completed the AI Learning Self-Assessment!\n\n\
         \u{2728} My learning route: {name}\n{description}\n\n\
         \u{1F4CB} 7-day action plan:\n{preview}\n...\n\n\
         \u{1F4A1} Take the quiz and map your own AI learning route!",
        name = template.name,
        description = template.description,
        preview = preview,
    )
}
