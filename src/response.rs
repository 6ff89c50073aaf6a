//! Canned first-person persona responses.
//!
//! The line is picked from a length-derived seed, not from what the content
//! says: two inputs whose persona label and content have the same combined
//! length get the same response.

use crate::ContentKind;

const TEXT_RESPONSES: [&str; 3] = [
    "The writing is clear and the main point comes through quickly, though I'd like a stronger opening line.",
    "Some of the phrasing feels generic to me; a concrete example would make it land.",
    "I appreciate the structure here. It's easy to skim and I know what to do next.",
];

const IMAGE_RESPONSES: [&str; 3] = [
    "The visual grabs my attention right away and the colors fit the message.",
    "The image feels a bit busy; I'm not sure where to look first.",
    "This looks polished, but I'd want to see people like me in the shot.",
];

const VIDEO_RESPONSES: [&str; 3] = [
    "The first few seconds hooked me and the pacing kept me watching.",
    "It takes too long to get to the point; I'd probably scroll past before the payoff.",
    "The production quality is solid, and captions would help when I watch on mute.",
];

const AUDIO_RESPONSES: [&str; 3] = [
    "The voice is warm and easy to follow, which makes me want to keep listening.",
    "The audio is fine, but without a clear hook early on my attention drifts.",
    "I like the conversational feel; it sounds like advice from someone I trust.",
];

fn responses_for(kind: ContentKind) -> &'static [&'static str; 3] {
    match kind {
        ContentKind::Text => &TEXT_RESPONSES,
        ContentKind::Image => &IMAGE_RESPONSES,
        ContentKind::Video => &VIDEO_RESPONSES,
        ContentKind::Audio => &AUDIO_RESPONSES,
    }
}

/// `chars(persona) + chars(content)`.
pub fn response_seed(persona: &str, content: &str) -> usize {
    persona.chars().count() + content.chars().count()
}

pub fn select_response(kind: ContentKind, seed: usize) -> &'static str {
    responses_for(kind)[seed % 3]
}

/// Content is trimmed before seeding, so surrounding whitespace never changes
/// the chosen response.
pub fn assemble_response(persona: &str, kind: ContentKind, content: &str) -> String {
    let seed = response_seed(persona, content.trim());
    let line = select_response(kind, seed);
    let conclusion = if seed % 2 == 0 {
        "Overall, I'd engage with this and would likely share it with people who think like me."
    } else {
        "Overall, it's a reasonable start, but a few changes would make me much more likely to act on it."
    };

    format!(
        "As {}, here's my take on this {}:\n\n{}\n\n{}",
        persona,
        kind.noun(),
        line,
        conclusion
    )
}
