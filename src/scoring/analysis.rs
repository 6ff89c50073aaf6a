use serde::{Deserialize, Serialize};

use crate::scoring::ScoreSource;

/// Headline numbers shown when reviewing a saved library entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub sentiment: u8,
    pub engagement: u8,
    pub sharing: u8,
    pub conversion: u8,
}

pub fn analyze_content(source: &mut dyn ScoreSource) -> ContentAnalysis {
    ContentAnalysis {
        sentiment: 60 + source.draw(40) as u8,
        engagement: 50 + source.draw(30) as u8,
        sharing: 40 + source.draw(40) as u8,
        conversion: 30 + source.draw(30) as u8,
    }
}
