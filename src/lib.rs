pub mod config;
pub mod error;
pub mod library;
pub mod persona;
pub mod progress;
pub mod response;
pub mod samples;
pub mod scoring;
pub mod session;
pub mod store;
pub mod transform;
pub mod variation;

use serde::{Deserialize, Serialize};

use crate::config::PlaybackConfig;
use crate::scoring::{MetricSynthesizer, RandomSource, ReactionSynthesizer};

pub use error::{PreviewError, PreviewResult};
pub use persona::Persona;
pub use scoring::{ContentAnalysis, Reaction, ScoreSource, VariantMetrics};
pub use session::PreviewSession;
pub use transform::Style;
pub use variation::{ContentVariant, VariationAxis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Text,
    Image,
    Video,
    Audio,
}

impl ContentKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "post" => Some(ContentKind::Text),
            "image" | "photo" | "pic" => Some(ContentKind::Image),
            "video" | "vid" => Some(ContentKind::Video),
            "audio" | "voice" => Some(ContentKind::Audio),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::Audio => "audio",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            ContentKind::Text => "written piece",
            ContentKind::Image => "image",
            ContentKind::Video => "video",
            ContentKind::Audio => "audio clip",
        }
    }
}

/// Configured synthesizers shared by every preview operation.
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    reactions: ReactionSynthesizer,
    metrics: MetricSynthesizer,
    seed: Option<u64>,
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::from_config(&PlaybackConfig::default())
    }
}

impl PlaybackEngine {
    pub fn from_config(config: &PlaybackConfig) -> Self {
        Self {
            reactions: ReactionSynthesizer::new(config.reaction.clone()),
            metrics: MetricSynthesizer::new(config.metrics.clone()),
            seed: config.seed,
        }
    }

    pub fn reactions(&self) -> &ReactionSynthesizer {
        &self.reactions
    }

    pub fn metrics(&self) -> &MetricSynthesizer {
        &self.metrics
    }

    /// A fresh random source, seeded when the configuration pins a seed.
    pub fn source(&self) -> RandomSource {
        RandomSource::from_seed_option(self.seed)
    }
}

pub fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

/// Cuts `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}

pub fn format_score(value: u8) -> String {
    format!("{}%", value)
}

pub fn score_bar(value: u8, width: usize) -> String {
    let filled = (value.min(100) as usize * width + 50) / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}
