use persona_playback::persona::{
    all_personas, browse_personas, discovery_personas, featured_personas, find_persona,
    search_personas,
};
use persona_playback::samples::Platform;
use persona_playback::scoring::{FixedSource, MetricSynthesizer};
use persona_playback::variation::generate_variations;
use persona_playback::{ContentKind, PlaybackEngine, PreviewError, PreviewSession, VariationAxis};

const CONTENT: &str = "Discover how AI is revolutionizing content creation for digital marketers. Our latest research shows a 45% increase in engagement when using AI-assisted tools.";

fn ready_session() -> PreviewSession {
    let mut session = PreviewSession::new();
    session.select_persona(find_persona("3").unwrap());
    session
        .submit_content(CONTENT, Platform::Blog, Some("Guide".to_string()))
        .unwrap();
    session
}

#[test]
fn catalog_lookup_spans_both_lists() {
    assert_eq!(featured_personas().len(), 6);
    assert_eq!(discovery_personas().len(), 8);
    assert_eq!(find_persona("pd7").unwrap().name, "Financial Advisor");
    assert_eq!(find_persona("4").unwrap().engagement, 65);
    assert!(find_persona("missing").is_none());
}

#[test]
fn browse_ids_resolve_to_discovery_profiles() {
    let browse = browse_personas();
    assert_eq!(browse.len(), 6);

    let influencer = find_persona("p6").unwrap();
    assert_eq!(influencer.name, "Social Media Influencer");
    assert_eq!(influencer.engagement, 90);
    assert_eq!(influencer.interests, find_persona("pd6").unwrap().interests);

    assert_eq!(all_personas().len(), 14);
}

#[test]
fn persona_search_matches_name_interest_and_description() {
    let personas = all_personas();

    let by_interest = search_personas(&personas, "YOGA");
    assert_eq!(by_interest.len(), 1);
    assert_eq!(by_interest[0].id, "pd4");

    let by_description: Vec<String> = search_personas(&personas, "medical advances")
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(by_description, vec!["pd8".to_string()]);

    assert_eq!(search_personas(&personas, "  ").len(), personas.len());
    assert!(search_personas(&personas, "zzz").is_empty());
}

#[test]
fn simulate_requires_persona_and_content() {
    let engine = PlaybackEngine::default();
    let mut session = PreviewSession::new();

    let err = session.simulate(&engine, &mut FixedSource::low()).unwrap_err();
    assert_eq!(err, PreviewError::MissingPersona);

    session.select_persona(find_persona("1").unwrap());
    let err = session.simulate(&engine, &mut FixedSource::low()).unwrap_err();
    assert_eq!(err, PreviewError::MissingContent);
}

#[test]
fn empty_submission_leaves_session_untouched() {
    let engine = PlaybackEngine::default();
    let mut session = ready_session();
    session.simulate(&engine, &mut FixedSource::new(15)).unwrap();

    let err = session.submit_content("   ", Platform::Social, None).unwrap_err();
    assert_eq!(err, PreviewError::MissingContent);
    assert_eq!(session.draft().unwrap().text, CONTENT);
    assert!(session.reaction().is_some());
}

#[test]
fn changing_inputs_drops_derived_results() {
    let engine = PlaybackEngine::default();
    let mut session = ready_session();
    session.simulate(&engine, &mut FixedSource::new(15)).unwrap();
    session
        .generate_variations(VariationAxis::Format, &engine, &mut FixedSource::new(10))
        .unwrap();
    assert_eq!(session.variations().len(), 3);

    session.select_persona(find_persona("5").unwrap());
    assert!(session.reaction().is_none());
    assert!(session.variations().is_empty());
    assert!(session.variation_axis().is_none());
}

#[test]
fn toggling_the_selected_persona_clears_it() {
    let mut session = PreviewSession::new();
    let persona = find_persona("pd2").unwrap();

    session.toggle_persona(persona.clone());
    assert_eq!(session.persona().map(|p| p.id.as_str()), Some("pd2"));

    session.toggle_persona(persona);
    assert!(session.persona().is_none());
}

#[test]
fn regeneration_replaces_previous_variations() {
    let engine = PlaybackEngine::default();
    let mut session = ready_session();

    session
        .generate_variations(VariationAxis::Tone, &engine, &mut FixedSource::new(10))
        .unwrap();
    let ids: Vec<String> = session
        .generate_variations(VariationAxis::Cta, &engine, &mut FixedSource::new(10))
        .unwrap()
        .iter()
        .map(|variant| variant.id.clone())
        .collect();

    assert_eq!(ids, vec!["urgent", "benefit", "fomo"]);
    assert_eq!(session.variation_axis(), Some(VariationAxis::Cta));
}

#[test]
fn variation_metrics_follow_plan_base_scores() {
    let variants = generate_variations(
        CONTENT,
        VariationAxis::Emotion,
        &MetricSynthesizer::default(),
        &mut FixedSource::new(10),
    )
    .unwrap();

    let engagement: Vec<u8> = variants.iter().map(|v| v.metrics.engagement).collect();
    assert_eq!(engagement, vec![85, 70, 75]);
    assert_eq!(variants[0].metrics.conversion, 65);
    assert_eq!(variants[0].metrics.shareability, 75);
    assert!(variants[2].content.starts_with("Based on our decade of research"));
}

#[test]
fn cta_variants_append_to_original() {
    let variants = generate_variations(
        CONTENT,
        VariationAxis::Cta,
        &MetricSynthesizer::default(),
        &mut FixedSource::low(),
    )
    .unwrap();

    for variant in &variants {
        assert!(variant.content.starts_with(CONTENT));
        assert!(variant.content.contains("\n\n"));
    }
    assert!(variants[0].content.ends_with("disappears forever."));
}

#[test]
fn variations_require_content() {
    let err = generate_variations(
        "",
        VariationAxis::Tone,
        &MetricSynthesizer::default(),
        &mut FixedSource::low(),
    )
    .unwrap_err();
    assert_eq!(err, PreviewError::MissingContent);
}

#[test]
fn session_response_uses_persona_name() {
    let session = ready_session();
    let text = session.respond(ContentKind::Text).unwrap();

    assert!(text.starts_with("As Creative Professional, here's my take on this written piece:"));
}

#[test]
fn platform_samples_come_with_default_titles() {
    let blog = Platform::Blog.sample(&mut FixedSource::low());
    assert_eq!(blog.title.as_deref(), Some("The Ultimate Guide to AI-Powered Marketing"));
    assert_eq!(blog.content, Platform::Blog.samples()[0]);

    let social = Platform::Social.sample(&mut FixedSource::high());
    assert!(social.title.is_none());
    assert_eq!(social.content, Platform::Social.samples()[2]);
}
