use persona_playback::transform::{transform, transform_tagged, Style};

const SAMPLE: &str = "The quick brown fox jumps over the lazy dog and runs fast today";

#[test]
fn listicle_builds_three_items_from_word_windows() {
    let result = transform(SAMPLE, Style::Listicle);

    assert_eq!(
        result,
        "Top 3 Things You Need to Know:\n\n1. The quick brown fox jumps over the\n2. lazy dog and runs fast today\n3. "
    );
}

#[test]
fn every_style_produces_new_non_empty_text() {
    for style in Style::ALL {
        let result = transform(SAMPLE, style);
        assert!(!result.trim().is_empty(), "{:?} produced empty text", style);
        assert_ne!(result, SAMPLE, "{:?} returned input unchanged", style);
    }
}

#[test]
fn styles_survive_empty_input() {
    for style in Style::ALL {
        let result = transform("", style);
        assert!(!result.is_empty());
    }
}

#[test]
fn professional_skips_first_word_and_uses_tail() {
    let result = transform("alpha beta gamma delta epsilon zeta", Style::Professional);

    assert_eq!(
        result,
        "I'd like to present our findings on beta gamma delta epsilon. Our analysis indicates that zeta. Furthermore, alpha beta gamma delta epsilon zeta."
    );
}

#[test]
fn qa_splits_into_question_answer_pairs() {
    let result = transform(SAMPLE, Style::Qa);

    assert!(result.starts_with("Q: What's the deal with The quick brown fox jumps?\n"));
    assert!(result.contains("A: It's fascinating because over the lazy dog and runs fast today."));
    assert!(result.ends_with("A: Because ."));
}

#[test]
fn unknown_tag_returns_content_unchanged() {
    assert_eq!(transform_tagged(SAMPLE, "pirate"), SAMPLE);
    assert_eq!(transform_tagged(SAMPLE, ""), SAMPLE);
}

#[test]
fn tags_are_case_insensitive_with_aliases() {
    assert_eq!(Style::from_str("LISTICLE"), Some(Style::Listicle));
    assert_eq!(Style::from_str("q-and-a"), Some(Style::Qa));
    assert_eq!(
        transform_tagged(SAMPLE, "Trust"),
        transform(SAMPLE, Style::Trust)
    );
}

#[test]
fn whitespace_runs_do_not_create_empty_words() {
    let spaced = "one   two\tthree\n\nfour";
    let result = transform(spaced, Style::Excitement);

    assert!(result.contains("about one two three four!"));
}
