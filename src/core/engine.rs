use crate::core::{Probe, ProbeReport};
use crate::utils::error::Result;

pub struct ProbeEngine<P: Probe> {
    probe: P,
}

impl<P: Probe> ProbeEngine<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    pub async fn run(&self) -> Result<ProbeReport> {
        tracing::info!("🔍 Probing API...");
        let report = self.probe.probe().await?;
        tracing::info!("✅ API responded with status {}", report.status);
        Ok(report)
    }

    /// 唯一的錯誤邊界：任何失敗都轉成一行 `Error: ...`，不往外傳
    pub async fn run_and_render(&self) -> String {
        match self.run().await {
            Ok(report) => report.to_string(),
            Err(e) => {
                let message = e.full_message();
                tracing::info!(
                    "❌ Probe failed: {} (Category: {:?}, Severity: {:?})",
                    message,
                    e.category(),
                    e.severity()
                );
                tracing::info!("💡 Suggestion: {}", e.recovery_suggestion());
                format!("Error: {}", message)
            }
        }
    }
}
