/**
 * Ingest Notifications
 *
 * After a clip or message lands in the store, interested downstream
 * services get a webhook ping. Pings are fire-and-forget: they run on a
 * spawned task, and a failing or unset webhook never affects the
 * response to the ingesting bot.
 */

use crate::server::config::Config;

/// Fire-and-forget webhook client.
#[derive(Clone)]
pub struct Notifier {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl Notifier {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.notify_base_url.clone(),
        }
    }

    /// Ping `<base>/new_clip` after a clip insert.
    pub fn clip_added(&self) {
        let Some(base_url) = &self.base_url else {
            return;
        };

        let request = self.http.get(format!("{base_url}/new_clip"));
        tokio::spawn(async move {
            if let Err(e) = request.send().await {
                tracing::warn!(error = %e, "new_clip notification failed");
            }
        });
    }

    /// Ping `<base>/new_message` with the channel after a message insert.
    pub fn message_added(&self, channel: &str) {
        let Some(base_url) = &self.base_url else {
            return;
        };

        let request = self
            .http
            .post(format!("{base_url}/new_message"))
            .json(&serde_json::json!({ "channel": channel }));
        tokio::spawn(async move {
            if let Err(e) = request.send().await {
                tracing::warn!(error = %e, "new_message notification failed");
            }
        });
    }
}
