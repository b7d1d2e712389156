//! Outbound HTTP probe

use reqwest::Client;

use super::error::Result;

/// Fires a GET at a fixed target and reports status plus body length, which
/// is all the fixture needs from the outbound-call kind.
pub struct HttpProbe {
    client: Client,
    target: String,
}

#[derive(Debug)]
pub struct OutboundResult {
    pub status: u16,
    pub body_len: usize,
}

impl HttpProbe {
    pub fn new(target: &str) -> Self {
        Self {
            client: Client::new(),
            target: target.to_string(),
        }
    }

    /// GET the target with the probe value as a query parameter.
    pub async fn fetch(&self, val: &str) -> Result<OutboundResult> {
        let response = self
            .client
            .get(&self.target)
            .query(&[("val", val)])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(OutboundResult {
            status,
            body_len: body.len(),
        })
    }
}
