use serde::{Deserialize, Serialize};

use crate::scoring::{clamp_score, ScoreSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantMetrics {
    pub engagement: u8,
    pub conversion: u8,
    pub shareability: u8,
}

/// Offsets and floors applied around a variant's base score.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    pub variance_span: u32,
    pub ceiling: u8,
    pub engagement_floor: u8,
    pub conversion_offset: i32,
    pub conversion_floor: u8,
    pub shareability_offset: i32,
    pub shareability_floor: u8,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            variance_span: 20,
            ceiling: 100,
            engagement_floor: 10,
            conversion_offset: -20,
            conversion_floor: 5,
            shareability_offset: -10,
            shareability_floor: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSynthesizer {
    config: MetricsConfig,
}

impl Default for MetricSynthesizer {
    fn default() -> Self {
        Self::new(MetricsConfig::default())
    }
}

impl MetricSynthesizer {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn synthesize(&self, base: u8, source: &mut dyn ScoreSource) -> VariantMetrics {
        let base = base as i32;
        let span = self.config.variance_span;
        let ceiling = self.config.ceiling;

        let engagement = clamp_score(
            base + source.jitter(span),
            self.config.engagement_floor,
            ceiling,
        );
        let conversion = clamp_score(
            base + self.config.conversion_offset + source.jitter(span),
            self.config.conversion_floor,
            ceiling,
        );
        let shareability = clamp_score(
            base + self.config.shareability_offset + source.jitter(span),
            self.config.shareability_floor,
            ceiling,
        );

        VariantMetrics {
            engagement,
            conversion,
            shareability,
        }
    }
}

pub fn synthesize_metrics(base: u8, source: &mut dyn ScoreSource) -> VariantMetrics {
    MetricSynthesizer::default().synthesize(base, source)
}
