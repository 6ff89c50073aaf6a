use serde::{Deserialize, Serialize};

use crate::error::{PreviewError, PreviewResult};
use crate::persona::Persona;
use crate::scoring::{clamp_score, FeedbackBand, ScoreSource};

/// Simulated audience response of one persona to one piece of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub sentiment: u8,
    pub engagement: u8,
    pub sharing: u8,
    pub conversion: u8,
    pub feedback: String,
    pub suggestion: String,
    pub emotional_response: String,
}

impl Reaction {
    pub fn band(&self) -> FeedbackBand {
        FeedbackBand::from_score(self.sentiment)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionConfig {
    /// Persona engagement above this is ignored when seeding sentiment.
    pub sentiment_cap: u8,
    pub sentiment_span: u32,
    pub sentiment_floor: u8,
    pub engagement_span: u32,
    pub engagement_floor: u8,
    pub engagement_ceiling: u8,
    pub sharing_offset: i32,
    pub sharing_span: u32,
    pub conversion_offset: i32,
    pub conversion_span: u32,
    pub conversion_ceiling: u8,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            sentiment_cap: 80,
            sentiment_span: 30,
            sentiment_floor: 5,
            engagement_span: 20,
            engagement_floor: 10,
            engagement_ceiling: 95,
            sharing_offset: -20,
            sharing_span: 30,
            conversion_offset: -30,
            conversion_span: 25,
            conversion_ceiling: 90,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReactionSynthesizer {
    config: ReactionConfig,
}

impl Default for ReactionSynthesizer {
    fn default() -> Self {
        Self::new(ReactionConfig::default())
    }
}

impl ReactionSynthesizer {
    pub fn new(config: ReactionConfig) -> Self {
        Self { config }
    }

    pub fn react(
        &self,
        persona: &Persona,
        content: &str,
        source: &mut dyn ScoreSource,
    ) -> PreviewResult<Reaction> {
        if content.trim().is_empty() {
            return Err(PreviewError::MissingContent);
        }

        let config = &self.config;
        let base = persona.engagement.min(config.sentiment_cap) as i32;
        let sentiment = clamp_score(
            base + source.jitter(config.sentiment_span),
            config.sentiment_floor,
            100,
        );

        let sentiment_value = sentiment as i32;
        let engagement = clamp_score(
            sentiment_value - source.draw(config.engagement_span) as i32,
            config.engagement_floor,
            config.engagement_ceiling,
        );
        let sharing = clamp_score(
            sentiment_value + config.sharing_offset - source.draw(config.sharing_span) as i32,
            0,
            100,
        );
        let conversion = clamp_score(
            sentiment_value + config.conversion_offset
                - source.draw(config.conversion_span) as i32,
            0,
            config.conversion_ceiling,
        );

        let band = FeedbackBand::from_score(sentiment);
        let canned = band.feedback();
        tracing::debug!(
            persona = %persona.id,
            sentiment,
            engagement,
            sharing,
            conversion,
            band = band.label(),
            "synthesized reaction"
        );

        Ok(Reaction {
            sentiment,
            engagement,
            sharing,
            conversion,
            feedback: canned.feedback.to_string(),
            suggestion: canned.suggestion.to_string(),
            emotional_response: canned.emotional_response.to_string(),
        })
    }
}

pub fn simulate_reaction(
    persona: &Persona,
    content: &str,
    source: &mut dyn ScoreSource,
) -> PreviewResult<Reaction> {
    ReactionSynthesizer::default().react(persona, content, source)
}
