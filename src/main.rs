use clap::Parser;
use fuel_counter::core::ConfigProvider;
use fuel_counter::utils::{logger, validation::Validate};
use fuel_counter::{CliConfig, FileSource, FuelEngine, FuelError, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)，命令列參數優先
    let result = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                config.apply_cli_overrides(&cli);
                execute(&config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
        },
        None => execute(&cli),
    };

    match result {
        Ok(report) => println!("{}", report),
        Err(e) => {
            tracing::error!("❌ Fuel computation failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }
}

fn execute<C: ConfigProvider + Validate + std::fmt::Debug>(
    config: &C,
) -> Result<fuel_counter::FuelReport, FuelError> {
    // 初始化日誌
    logger::init_cli_logger(config.verbose());
    tracing::debug!("Config: {:?}", config);

    // 驗證配置
    config.validate()?;

    let source = FileSource::new(config.input_path());
    let engine = FuelEngine::new_with_policy(source, config.missing_input_policy());
    engine.run()
}
