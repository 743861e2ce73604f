use crate::types::answers::BranchChoice;
use crate::types::dimension::Dimension;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DimensionBlock {
    pub dimension: Dimension,
    pub name: &'static str,
    pub questions: [Question; 3],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BranchOption {
    pub value: BranchChoice,
    pub text: &'static str,
}

/// A binary-choice question inserted after one dimension's block.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BranchQuestion {
    pub id: &'static str,
    pub text: &'static str,
    pub options: [BranchOption; 2],
    pub after: Dimension,
}

pub static QUESTION_BANK: [DimensionBlock; 8] = [
    DimensionBlock {
        dimension: Dimension::TB,
        name: "Tech Base",
        questions: [
            Question {
                id: "TB1",
                text: "I can quickly pick up new technical tools and programming concepts.",
            },
            Question {
                id: "TB2",
                text: "I am comfortable with computing fundamentals such as file systems, networking, and the command line.",
            },
            Question {
                id: "TB3",
                text: "I can resolve technical problems on my own or find solutions through research.",
            },
        ],
    },
    DimensionBlock {
        dimension: Dimension::LS,
        name: "Learning Strategy",
        questions: [
            Question {
                id: "LS1",
                text: "I set explicit plans and goals when learning something new.",
            },
            Question {
                id: "LS2",
                text: "I review and summarize what I have learned on a regular basis.",
            },
            Question {
                id: "LS3",
                text: "I learn best by doing, using hands-on projects to consolidate theory.",
            },
        ],
    },
    DimensionBlock {
        dimension: Dimension::TI,
        name: "Time Investment",
        questions: [
            Question {
                id: "TI1",
                text: "I can commit a fixed block of time to AI learning every week.",
            },
            Question {
                id: "TI2",
                text: "I am willing to rearrange my routine to make room for deeper AI study.",
            },
            Question {
                id: "TI3",
                text: "I can sustain a learning rhythm for six months or longer without giving up.",
            },
        ],
    },
    DimensionBlock {
        dimension: Dimension::GO,
        name: "Goal Orientation",
        questions: [
            Question {
                id: "GO1",
                text: "I know exactly what I want to achieve by learning AI.",
            },
            Question {
                id: "GO2",
                text: "My learning goals line up with my career plans or personal direction.",
            },
            Question {
                id: "GO3",
                text: "I can break large goals into actionable milestones.",
            },
        ],
    },
    DimensionBlock {
        dimension: Dimension::AI,
        name: "AI Awareness",
        questions: [
            Question {
                id: "AI1",
                text: "I understand core AI concepts such as machine learning, deep learning, and large models.",
            },
            Question {
                id: "AI2",
                text: "I know how to apply AI tools such as ChatGPT or Midjourney to real problems.",
            },
            Question {
                id: "AI3",
                text: "I follow the latest developments and trends in the AI field.",
            },
        ],
    },
    DimensionBlock {
        dimension: Dimension::DM,
        name: "Data Mindset",
        questions: [
            Question {
                id: "DM1",
                text: "I habitually back my opinions and decisions with data and facts.",
            },
            Question {
                id: "DM2",
                text: "I have a working grasp of basic statistics such as averages and correlation.",
            },
            Question {
                id: "DM3",
                text: "I can spot and question anomalies or bias in data.",
            },
        ],
    },
    DimensionBlock {
        dimension: Dimension::CC,
        name: "Content Creation",
        questions: [
            Question {
                id: "CC1",
                text: "I am good at expressing ideas clearly through writing, images, or video.",
            },
            Question {
                id: "CC2",
                text: "I enjoy sharing knowledge and can make it easy for others to understand.",
            },
            Question {
                id: "CC3",
                text: "I create and publish content regularly, such as blog posts or videos.",
            },
        ],
    },
    DimensionBlock {
        dimension: Dimension::CR,
        name: "Critical Reasoning",
        questions: [
            Question {
                id: "CR1",
                text: "I examine the merits and limits of a new idea before accepting it.",
            },
            Question {
                id: "CR2",
                text: "I can identify logical gaps or hidden bias in information.",
            },
            Question {
                id: "CR3",
                text: "I analyze problems from multiple angles rather than taking them at face value.",
            },
        ],
    },
];

pub static BRANCH_QUESTIONS: [BranchQuestion; 2] = [
    BranchQuestion {
        id: "B1",
        text: "When learning AI, which do you prefer?",
        options: [
            BranchOption {
                value: BranchChoice::A,
                text: "Ship results fast and see immediate payoff, e.g. a working AI application.",
            },
            BranchOption {
                value: BranchChoice::B,
                text: "Build deep understanding first, e.g. how the algorithms actually work.",
            },
        ],
        after: Dimension::LS,
    },
    BranchQuestion {
        id: "B2",
        text: "Which direction pulls you more?",
        options: [
            BranchOption {
                value: BranchChoice::A,
                text: "Automating repetitive work and boosting efficiency (tooling).",
            },
            BranchOption {
                value: BranchChoice::B,
                text: "Creating content, voicing ideas, growing an audience (publishing).",
            },
        ],
        after: Dimension::CC,
    },
];
