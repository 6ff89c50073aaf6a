use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, PreviewResult};
use crate::scoring::{MetricSynthesizer, ScoreSource, VariantMetrics};
use crate::transform::{transform, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationAxis {
    Tone,
    Format,
    Cta,
    Emotion,
}

impl VariationAxis {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "tone" => Some(VariationAxis::Tone),
            "format" => Some(VariationAxis::Format),
            "cta" | "call-to-action" => Some(VariationAxis::Cta),
            "emotion" | "emotional" => Some(VariationAxis::Emotion),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VariationAxis::Tone => "tone",
            VariationAxis::Format => "format",
            VariationAxis::Cta => "cta",
            VariationAxis::Emotion => "emotion",
        }
    }

    fn plans(self) -> &'static [VariantPlan; 3] {
        match self {
            VariationAxis::Tone => &TONE_PLANS,
            VariationAxis::Format => &FORMAT_PLANS,
            VariationAxis::Cta => &CTA_PLANS,
            VariationAxis::Emotion => &EMOTION_PLANS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVariant {
    pub id: String,
    pub title: String,
    pub content: String,
    pub metrics: VariantMetrics,
}

enum Rewrite {
    Restyle(Style),
    AppendCta(&'static str),
}

struct VariantPlan {
    id: &'static str,
    title: &'static str,
    rewrite: Rewrite,
    base_score: u8,
}

impl VariantPlan {
    fn render(&self, content: &str) -> String {
        match &self.rewrite {
            Rewrite::Restyle(style) => transform(content, *style),
            Rewrite::AppendCta(cta) => format!("{}\n\n{}", content, cta),
        }
    }
}

static TONE_PLANS: [VariantPlan; 3] = [
    VariantPlan {
        id: "professional",
        title: "Professional",
        rewrite: Rewrite::Restyle(Style::Professional),
        base_score: 80,
    },
    VariantPlan {
        id: "casual",
        title: "Casual & Friendly",
        rewrite: Rewrite::Restyle(Style::Casual),
        base_score: 70,
    },
    VariantPlan {
        id: "enthusiastic",
        title: "Enthusiastic",
        rewrite: Rewrite::Restyle(Style::Enthusiastic),
        base_score: 75,
    },
];

static FORMAT_PLANS: [VariantPlan; 3] = [
    VariantPlan {
        id: "listicle",
        title: "Listicle Format",
        rewrite: Rewrite::Restyle(Style::Listicle),
        base_score: 65,
    },
    VariantPlan {
        id: "story",
        title: "Narrative Story",
        rewrite: Rewrite::Restyle(Style::Story),
        base_score: 85,
    },
    VariantPlan {
        id: "q-and-a",
        title: "Q&A Format",
        rewrite: Rewrite::Restyle(Style::Qa),
        base_score: 60,
    },
];

static CTA_PLANS: [VariantPlan; 3] = [
    VariantPlan {
        id: "urgent",
        title: "Urgency-Based CTA",
        rewrite: Rewrite::AppendCta(
            "Limited time offer! Act now before this opportunity disappears forever.",
        ),
        base_score: 65,
    },
    VariantPlan {
        id: "benefit",
        title: "Benefit-Focused CTA",
        rewrite: Rewrite::AppendCta(
            "Discover how this can transform your approach today. Click to learn more.",
        ),
        base_score: 80,
    },
    VariantPlan {
        id: "fomo",
        title: "FOMO-Inducing CTA",
        rewrite: Rewrite::AppendCta(
            "Join thousands of others who have already taken advantage of this insight.",
        ),
        base_score: 75,
    },
];

static EMOTION_PLANS: [VariantPlan; 3] = [
    VariantPlan {
        id: "excitement",
        title: "Excitement & Enthusiasm",
        rewrite: Rewrite::Restyle(Style::Excitement),
        base_score: 85,
    },
    VariantPlan {
        id: "curiosity",
        title: "Curiosity & Wonder",
        rewrite: Rewrite::Restyle(Style::Curiosity),
        base_score: 70,
    },
    VariantPlan {
        id: "trust",
        title: "Trust & Authority",
        rewrite: Rewrite::Restyle(Style::Trust),
        base_score: 75,
    },
];

pub fn generate_variations(
    content: &str,
    axis: VariationAxis,
    synthesizer: &MetricSynthesizer,
    source: &mut dyn ScoreSource,
) -> PreviewResult<Vec<ContentVariant>> {
    if content.trim().is_empty() {
        return Err(PreviewError::MissingContent);
    }

    let variants: Vec<ContentVariant> = axis
        .plans()
        .iter()
        .map(|plan| ContentVariant {
            id: plan.id.to_string(),
            title: plan.title.to_string(),
            content: plan.render(content),
            metrics: synthesizer.synthesize(plan.base_score, source),
        })
        .collect();

    tracing::info!(axis = axis.label(), count = variants.len(), "generated variations");
    Ok(variants)
}
