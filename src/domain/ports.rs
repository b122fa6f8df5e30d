use crate::domain::model::ProbeReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn endpoint_path(&self) -> &str;
    fn verify_tls(&self) -> bool;
    fn preview_chars(&self) -> usize;

    fn target_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url().trim_end_matches('/'),
            self.endpoint_path().trim_start_matches('/')
        )
    }
}

#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self) -> Result<ProbeReport>;
}
