//! Word-slice templates that restyle a piece of content.
//!
//! Slices are clamped to the available words, so short inputs produce shorter
//! (possibly empty) substitutions instead of errors.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    Professional,
    Casual,
    Enthusiastic,
    Listicle,
    Story,
    Qa,
    Excitement,
    Curiosity,
    Trust,
}

impl Style {
    pub const ALL: [Style; 9] = [
        Style::Professional,
        Style::Casual,
        Style::Enthusiastic,
        Style::Listicle,
        Style::Story,
        Style::Qa,
        Style::Excitement,
        Style::Curiosity,
        Style::Trust,
    ];

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "professional" => Some(Style::Professional),
            "casual" => Some(Style::Casual),
            "enthusiastic" => Some(Style::Enthusiastic),
            "listicle" | "list" => Some(Style::Listicle),
            "story" => Some(Style::Story),
            "qa" | "q-and-a" | "q&a" => Some(Style::Qa),
            "excitement" => Some(Style::Excitement),
            "curiosity" => Some(Style::Curiosity),
            "trust" => Some(Style::Trust),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Style::Professional => "professional",
            Style::Casual => "casual",
            Style::Enthusiastic => "enthusiastic",
            Style::Listicle => "listicle",
            Style::Story => "story",
            Style::Qa => "qa",
            Style::Excitement => "excitement",
            Style::Curiosity => "curiosity",
            Style::Trust => "trust",
        }
    }
}

pub fn transform(content: &str, style: Style) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    let w = |start: usize, end: usize| slice_words(&words, start, end);

    match style {
        Style::Professional => format!(
            "I'd like to present our findings on {}. Our analysis indicates that {}. Furthermore, {}.",
            w(1, 5),
            w(5, 15),
            tail_words(&words, 15)
        ),
        Style::Casual => format!(
            "Hey there! Check this out - {}. Isn't that cool? And guess what: {}! Let's dive deeper into this...",
            w(0, 10),
            w(10, 20)
        ),
        Style::Enthusiastic => format!(
            "WOW! This is AMAZING! {}! I'm so excited to share that {}! You're going to LOVE this!",
            w(0, 10),
            w(10, 20)
        ),
        Style::Listicle => format!(
            "Top 3 Things You Need to Know:\n\n1. {}\n2. {}\n3. {}",
            w(0, 7),
            w(7, 14),
            w(14, 21)
        ),
        Style::Story => format!(
            "I remember when I first discovered {}. It was a game-changer. Before that, {}. But now, everything is different because {}.",
            w(0, 5),
            w(5, 15),
            w(15, 25)
        ),
        Style::Qa => format!(
            "Q: What's the deal with {}?\nA: It's fascinating because {}.\n\nQ: Why should I care?\nA: Because {}.",
            w(0, 5),
            w(5, 15),
            w(15, 25)
        ),
        Style::Excitement => format!(
            "I'm thrilled to share this incredible insight about {}! This is a game-changing approach that will transform how you think about {}!",
            w(0, 7),
            w(7, 14)
        ),
        Style::Curiosity => format!(
            "Have you ever wondered what would happen if {}? The answer might surprise you. Consider this: {}...",
            w(0, 7),
            w(7, 20)
        ),
        Style::Trust => format!(
            "Based on our decade of research and thousands of case studies, we can confidently state that {}. Experts agree that {}.",
            w(0, 15),
            w(15, 30)
        ),
    }
}

/// Restyles by tag name; an unrecognized tag leaves the content untouched.
pub fn transform_tagged(content: &str, tag: &str) -> String {
    match Style::from_str(tag) {
        Some(style) => transform(content, style),
        None => content.to_string(),
    }
}

fn slice_words(words: &[&str], start: usize, end: usize) -> String {
    let end = end.min(words.len());
    let start = start.min(end);
    words[start..end].join(" ")
}

fn tail_words(words: &[&str], count: usize) -> String {
    let start = words.len().saturating_sub(count);
    words[start..].join(" ")
}
