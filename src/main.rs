use clap::Parser;
use user_analysis::utils::logger;
use user_analysis::{AnalysisEngine, CliConfig, LocalStorage, UserAnalysisPipeline};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting user-analysis CLI");
    tracing::debug!("CLI config: {:?}", cli);

    // 解析並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::info!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(&cli.base_dir);
    let pipeline = UserAnalysisPipeline::new(storage, config);
    let engine = AnalysisEngine::new_with_monitoring(pipeline, cli.monitor);

    match engine.run() {
        Ok(output_path) => {
            println!("Analysis complete! Report saved to {}", output_path);
        }
        Err(e) => {
            tracing::debug!(
                "Analysis failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::info!("💡 Suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}
