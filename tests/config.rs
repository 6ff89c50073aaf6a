use persona_playback::config::PlaybackConfig;
use persona_playback::scoring::{FixedSource, MetricSynthesizer};
use std::time::Duration;
use tempfile::TempDir;

#[test]
fn partial_toml_keeps_defaults_for_missing_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("playback.toml");
    std::fs::write(
        &path,
        "seed = 11\n\n[latency]\nenabled = false\n\n[metrics]\nvariance_span = 0\n",
    )
    .unwrap();

    let config = PlaybackConfig::read(&path).unwrap();
    assert_eq!(config.seed, Some(11));
    assert_eq!(config.latency.delay(config.latency.reaction_ms), Duration::ZERO);
    assert_eq!(config.latency.variations_ms, 2000);
    assert_eq!(config.metrics.ceiling, 100);

    let metrics = MetricSynthesizer::new(config.metrics).synthesize(70, &mut FixedSource::high());
    assert_eq!(metrics.engagement, 70);
}

#[test]
fn written_config_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("playback.toml");
    let mut config = PlaybackConfig::default();
    config.latency.response_ms = 250;

    config.write(&path).unwrap();
    let read = PlaybackConfig::read(&path).unwrap();
    assert_eq!(read.latency.response_ms, 250);
    assert!(read.latency.enabled);
}

#[test]
fn malformed_toml_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "seed = [").unwrap();

    let err = PlaybackConfig::read(&path).unwrap_err();
    assert!(err.starts_with("failed to parse config"));
}
