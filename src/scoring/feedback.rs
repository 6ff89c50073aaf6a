use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub feedback: &'static str,
    pub suggestion: &'static str,
    pub emotional_response: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackBand {
    Strong,
    Moderate,
    Weak,
    Misaligned,
}

const STRONG: Feedback = Feedback {
    feedback: "This content resonates strongly with me. The points made align with my interests and values.",
    suggestion: "Consider adding a clear call to action to capitalize on the positive reception.",
    emotional_response: "I feel excited and engaged by this content. It speaks directly to my needs.",
};

const MODERATE: Feedback = Feedback {
    feedback: "This content is interesting, but I'm not fully convinced by some of the arguments.",
    suggestion: "Try adding more specific examples that would appeal to my demographic.",
    emotional_response: "I'm somewhat intrigued but not fully emotionally invested.",
};

const WEAK: Feedback = Feedback {
    feedback: "This content doesn't really speak to me. The tone seems off and the value proposition isn't clear.",
    suggestion: "Reconsider the framing and focus more on the benefits that would appeal to me.",
    emotional_response: "I feel somewhat disconnected from this message. It doesn't address my concerns.",
};

const MISALIGNED: Feedback = Feedback {
    feedback: "This content doesn't resonate with me at all. The tone, style and content seem completely misaligned with my interests.",
    suggestion: "This needs a complete rethink to appeal to someone with my profile.",
    emotional_response: "I feel this content wasn't created with someone like me in mind.",
};

impl FeedbackBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 75 {
            FeedbackBand::Strong
        } else if score >= 50 {
            FeedbackBand::Moderate
        } else if score >= 25 {
            FeedbackBand::Weak
        } else {
            FeedbackBand::Misaligned
        }
    }

    pub fn feedback(self) -> &'static Feedback {
        match self {
            FeedbackBand::Strong => &STRONG,
            FeedbackBand::Moderate => &MODERATE,
            FeedbackBand::Weak => &WEAK,
            FeedbackBand::Misaligned => &MISALIGNED,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FeedbackBand::Strong => "Positive",
            FeedbackBand::Moderate => "Mixed",
            FeedbackBand::Weak => "Lukewarm",
            FeedbackBand::Misaligned => "Negative",
        }
    }
}

pub fn select_feedback(score: u8) -> &'static Feedback {
    FeedbackBand::from_score(score).feedback()
}
