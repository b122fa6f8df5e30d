use crate::core::{ConfigProvider, Probe, ProbeReport};
use crate::utils::error::Result;
use reqwest::Client;

pub struct HttpProbe<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpProbe<C> {
    pub fn new(config: C) -> Result<Self> {
        // 本機開發用的自簽憑證，預設不驗證也不發出警告
        let client = Client::builder()
            .danger_accept_invalid_certs(!config.verify_tls())
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Probe for HttpProbe<C> {
    async fn probe(&self) -> Result<ProbeReport> {
        let url = self.config.target_url();

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());

        Ok(ProbeReport::new(
            status.as_u16(),
            body,
            self.config.preview_chars(),
        ))
    }
}
