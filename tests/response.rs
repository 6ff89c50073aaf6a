use persona_playback::response::{assemble_response, response_seed, select_response};
use persona_playback::ContentKind;

#[test]
fn seed_is_combined_character_length() {
    assert_eq!(response_seed("Retired Explorer", "hello"), 16 + 5);
    assert_eq!(response_seed("", ""), 0);
    assert_eq!(response_seed("Zoë", "café"), 7);
}

#[test]
fn same_lengths_select_same_line_and_branch() {
    let first = assemble_response("Tech Enthusiast", ContentKind::Video, "abcdefghij");
    let second = assemble_response("Tech Enthusiast", ContentKind::Video, "0123456789");

    let strip = |text: &str| text.replacen("Tech Enthusiast", "", 1);
    assert_eq!(strip(&first), strip(&second));
}

#[test]
fn response_wraps_line_in_preamble_and_conclusion() {
    // seed = 3 + 3 = 6: line 0, even branch
    let text = assemble_response("Ann", ContentKind::Image, "abc");

    assert!(text.starts_with("As Ann, here's my take on this image:\n\n"));
    assert!(text.contains(select_response(ContentKind::Image, 6)));
    assert!(text.ends_with("likely share it with people who think like me."));
}

#[test]
fn odd_seed_takes_the_other_conclusion() {
    // seed = 3 + 4 = 7: line 1, odd branch
    let text = assemble_response("Ann", ContentKind::Audio, "abcd");

    assert!(text.contains(select_response(ContentKind::Audio, 7)));
    assert!(text.ends_with("much more likely to act on it."));
}

#[test]
fn surrounding_whitespace_does_not_change_the_response() {
    // "abc" seeds 6; the padded form would seed 10 if it were counted
    let plain = assemble_response("Ann", ContentKind::Text, "abc");
    let padded = assemble_response("Ann", ContentKind::Text, "  abc\n\n");

    assert_eq!(plain, padded);
    assert!(plain.ends_with("likely share it with people who think like me."));
}

#[test]
fn lines_cycle_every_three_seeds() {
    for kind in [
        ContentKind::Text,
        ContentKind::Image,
        ContentKind::Video,
        ContentKind::Audio,
    ] {
        assert_eq!(select_response(kind, 0), select_response(kind, 3));
        assert_ne!(select_response(kind, 0), select_response(kind, 1));
        assert_ne!(select_response(kind, 1), select_response(kind, 2));
    }
}

#[test]
fn content_kind_parses_common_aliases() {
    assert_eq!(ContentKind::from_str("Photo"), Some(ContentKind::Image));
    assert_eq!(ContentKind::from_str("audio"), Some(ContentKind::Audio));
    assert_eq!(ContentKind::from_str("hologram"), None);
}
