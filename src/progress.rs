use serde::Serialize;
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};
use tokio::sync::{broadcast, Mutex};

/// How long a request's progress channel outlives the call that opened it.
pub const CHANNEL_TTL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Serialize)]
pub struct ProgressEvent {
    pub event: String,
    pub message: String,
    pub timestamp_ms: u128,
}

/// Per-request broadcast channels carrying simulation progress.
///
/// Every opener schedules removal after the TTL, so a stream whose request
/// never runs does not keep its channel alive.
#[derive(Clone)]
pub struct ProgressChannels {
    channels: Arc<Mutex<HashMap<String, broadcast::Sender<ProgressEvent>>>>,
    ttl: Duration,
}

impl Default for ProgressChannels {
    fn default() -> Self {
        Self::new(CHANNEL_TTL)
    }
}

impl ProgressChannels {
    pub fn new(ttl: Duration) -> Self {
        Self {
            channels: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Returns the channel for `request_id`, creating it when absent, and
    /// schedules its cleanup.
    pub async fn open(&self, request_id: &str) -> broadcast::Sender<ProgressEvent> {
        let sender = {
            let mut guard = self.channels.lock().await;
            match guard.get(request_id) {
                Some(sender) => sender.clone(),
                None => {
                    let (sender, _) = broadcast::channel(32);
                    guard.insert(request_id.to_string(), sender.clone());
                    sender
                }
            }
        };
        self.schedule_cleanup(request_id.to_string());
        sender
    }

    pub async fn contains(&self, request_id: &str) -> bool {
        self.channels.lock().await.contains_key(request_id)
    }

    fn schedule_cleanup(&self, request_id: String) {
        let channels = self.channels.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            let mut guard = channels.lock().await;
            guard.remove(&request_id);
            tracing::debug!(request_id = %request_id, "dropped progress channel");
        });
    }
}

pub fn send_event(sender: &broadcast::Sender<ProgressEvent>, event: &str, message: &str) {
    let _ = sender.send(ProgressEvent {
        event: event.to_string(),
        message: message.to_string(),
        timestamp_ms: now_ms(),
    });
}

pub fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_millis())
        .unwrap_or(0)
}
