pub mod analysis;
pub mod feedback;
pub mod metrics;
pub mod reaction;
pub mod source;

pub use analysis::{analyze_content, ContentAnalysis};
pub use feedback::{select_feedback, Feedback, FeedbackBand};
pub use metrics::{synthesize_metrics, MetricSynthesizer, MetricsConfig, VariantMetrics};
pub use reaction::{simulate_reaction, Reaction, ReactionConfig, ReactionSynthesizer};
pub use source::{FixedSource, RandomSource, ScoreSource};

/// Clamps a raw score into `floor..=ceiling`.
pub fn clamp_score(value: i32, floor: u8, ceiling: u8) -> u8 {
    value.max(floor as i32).min(ceiling as i32) as u8
}
