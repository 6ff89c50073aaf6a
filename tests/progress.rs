use persona_playback::progress::{send_event, ProgressChannels};
use std::time::Duration;

#[tokio::test]
async fn unused_stream_channel_is_dropped_after_ttl() {
    let channels = ProgressChannels::new(Duration::from_millis(20));
    let _sender = channels.open("req-orphan").await;
    assert!(channels.contains("req-orphan").await);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!channels.contains("req-orphan").await);
}

#[tokio::test]
async fn reopening_shares_one_channel() {
    let channels = ProgressChannels::new(Duration::from_secs(5));
    let stream_side = channels.open("req-1").await;
    let mut receiver = stream_side.subscribe();

    let simulate_side = channels.open("req-1").await;
    send_event(&simulate_side, "reaction", "Persona feedback ready");

    let event = receiver.recv().await.unwrap();
    assert_eq!(event.event, "reaction");
    assert_eq!(event.message, "Persona feedback ready");
}
