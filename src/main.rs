use book_probe::core::ConfigProvider;
use book_probe::utils::logger::{self, LogFormat};
use book_probe::utils::validation::Validate;
use book_probe::{CliConfig, HttpProbe, ProbeEngine, ProbeFileConfig};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(LogFormat::from_flags(cli.json_logs), cli.verbose);

    tracing::debug!("CLI config: {:?}", cli);

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = match ProbeFileConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };
            run_probe(config).await;
        }
        None => run_probe(cli).await,
    }

    Ok(())
}

async fn run_probe<C: ConfigProvider + Validate>(config: C) {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if !config.verify_tls() {
        tracing::debug!("TLS certificate verification disabled");
    }

    let probe = match HttpProbe::new(config) {
        Ok(probe) => probe,
        Err(e) => {
            println!("Error: {}", e.full_message());
            return;
        }
    };
    tracing::info!("🚀 GET {}", probe.config().target_url());

    let engine = ProbeEngine::new(probe);
    println!("{}", engine.run_and_render().await);
}
