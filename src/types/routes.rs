use serde::{Deserialize, Serialize};
use std::fmt;

/// The five learning-route templates. The set is closed: every route id
/// a gate or the ranker can emit has a template, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteId {
    T1,
    T2,
    T3,
    T4,
    T5,
}

impl RouteId {
    pub const ALL: [RouteId; 5] = [
        RouteId::T1,
        RouteId::T2,
        RouteId::T3,
        RouteId::T4,
        RouteId::T5,
    ];

    pub fn code(self) -> &'static str {
        match self {
            RouteId::T1 => "T1",
            RouteId::T2 => "T2",
            RouteId::T3 => "T3",
            RouteId::T4 => "T4",
            RouteId::T5 => "T5",
        }
    }

    pub fn template(self) -> &'static RouteTemplate {
        &TEMPLATES[self as usize]
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub struct RouteTemplate {
    pub id: RouteId,
    pub name: &'static str,
    pub description: &'static str,
    pub checklist: [&'static str; 7],
    pub maxims: [&'static str; 3],
}

static TEMPLATES: [RouteTemplate; 5] = [
    RouteTemplate {
        id: RouteId::T1,
        name: "Foundations First",
        description: "For learners with a thin technical base and limited time who want a practical on-ramp to AI.",
        checklist: [
            "Day 1: Sign up for ChatGPT, run 10 practice conversations, and note the use cases.",
            "Day 2: Learn prompt-engineering basics and collect 5 reusable prompt templates.",
            "Day 3: Use an AI tool to finish a real task, such as drafting an email or summarizing an article.",
            "Day 4: Explore an advanced feature of one AI tool, such as custom instructions or plugins.",
            "Day 5: Organize this week's notes into a personal knowledge base.",
            "Day 6: Join an AI learning community and trade experiences.",
            "Day 7: Draft next week's study plan and set one small goal.",
        ],
        maxims: [
            "Start by using AI tools, not by studying theory.",
            "Solve at least one real problem with AI every day.",
            "Be patient; learning compounds over the long run.",
        ],
    },
    RouteTemplate {
        id: RouteId::T2,
        name: "Technical Deep Dive",
        description: "For developers with a solid technical base who want to go deep on AI engineering.",
        checklist: [
            "Day 1: Set up a local Python environment and install the core AI libraries.",
            "Day 2: Study the fundamentals of the Transformer architecture.",
            "Day 3: Complete a first machine-learning project, such as MNIST digit classification.",
            "Day 4: Learn to work with the Hugging Face model hub.",
            "Day 5: Fine-tune a small pretrained model.",
            "Day 6: Read three classic AI papers.",
            "Day 7: Publish the week's project on GitHub with a technical write-up.",
        ],
        maxims: [
            "Code is the best teacher.",
            "Write code daily, ship a project weekly.",
            "Reproduce the classics first, then innovate.",
        ],
    },
    RouteTemplate {
        id: RouteId::T3,
        name: "Data-Driven Analyst",
        description: "For analysts and business people who want to enter AI through data analysis.",
        checklist: [
            "Day 1: Learn pandas and numpy basics with a data-cleaning exercise.",
            "Day 2: Build a data visualization in Python.",
            "Day 3: Study core statistics: hypothesis testing and confidence intervals.",
            "Day 4: Complete a regression-analysis project.",
            "Day 5: Learn the basics of feature engineering.",
            "Day 6: Solve a classification task with scikit-learn.",
            "Day 7: Re-run an analysis with AI assistance and compare the results.",
        ],
        maxims: [
            "Data comes before models; learn to handle it first.",
            "Tell stories with data instead of just crunching numbers.",
            "Start from the business question and let AI serve it.",
        ],
    },
    RouteTemplate {
        id: RouteId::T4,
        name: "Creator's Path",
        description: "For creators who want AI to amplify their output and grow a personal brand.",
        checklist: [
            "Day 1: Generate 10 article drafts in different styles with AI.",
            "Day 2: Learn an AI image tool such as Midjourney or Stable Diffusion and produce 10 images.",
            "Day 3: Outline a 5-minute video script with AI assistance.",
            "Day 4: Build an AI-assisted workflow from idea to outline to draft to polish.",
            "Day 5: Publish one high-quality piece produced with AI support.",
            "Day 6: Review content metrics and adjust direction.",
            "Day 7: Plan a content matrix and batch-generate a material library with AI.",
        ],
        maxims: [
            "AI is an assistant, not a replacement.",
            "Keep your own voice; AI is an amplifier.",
            "Publish consistently and let the data steer the strategy.",
        ],
    },
    RouteTemplate {
        id: RouteId::T5,
        name: "Strategic Navigator",
        description: "For driven operators with a clear goal who want AI to deliver a major breakthrough.",
        checklist: [
            "Day 1: Define the end goal of your AI learning and write a three-year plan.",
            "Day 2: Break the goal into six-month milestones and monthly OKRs.",
            "Day 3: Identify your core capability gaps and plan targeted study.",
            "Day 4: Kick off one high-value AI project that can earn money or a promotion.",
            "Day 5: Form a study group or find a mentor to build a support system.",
            "Day 6: Invest two focused hours a day in study plus practice.",
            "Day 7: Install a weekly review loop and adjust strategy to stay on target.",
        ],
        maxims: [
            "Let the goal drive the learning; skip busywork.",
            "Focus on high-value skills and reach ROI fast.",
            "Stay ruthlessly focused; refuse distractions.",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_resolves_to_its_own_template() {
        for route in RouteId::ALL {
            let template = route.template();
            assert_eq!(template.id, route);
            assert!(!template.name.is_empty());
            assert!(!template.description.is_empty());
        }
    }

    #[test]
    fn checklists_carry_a_full_week() {
        for route in RouteId::ALL {
            let template = route.template();
            assert!(template.checklist[0].starts_with("Day 1:"));
            assert!(template.checklist[6].starts_with("Day 7:"));
        }
    }
}
