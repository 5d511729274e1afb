use anyhow::{anyhow, Result};
use tracing::debug;

use crate::links;

/// Forwards interest clicks to the upstream tracking API. One POST per
/// click, no retry; transport failure and a rejected status are the same
/// failure to callers.
#[derive(Clone, Debug)]
pub struct InterestNotifier {
    client: reqwest::Client,
    base: String,
}

impl InterestNotifier {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn notify_interested(&self, prospect_id: &str) -> Result<()> {
        let url = links::interested_url(&self.base, prospect_id);
        debug!(prospect_id = %prospect_id, url = %url, "forwarding interest upstream");
        let response = self.client.post(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("upstream rejected interest with status {status}"));
        }
        Ok(())
    }
}
