use clap::Parser;
use quote_calc::config::cli::LoadedInput;
use quote_calc::config::OutputFormat;
use quote_calc::utils::error::{ErrorSeverity, QuoteError};
use quote_calc::utils::logger;
use quote_calc::{normalize, CliConfig, QuoteEngine, QuoteReport};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting quote-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "❌ Quote failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(config: &CliConfig) -> Result<(), QuoteError> {
    // 載入並驗證定價表
    let pricing = config.load_pricing()?;
    tracing::info!("✅ Pricing table '{}' loaded", pricing.calculator_name());

    if config.show_pricing {
        print!("{}", pricing.to_toml_string()?);
        return Ok(());
    }

    let request = match config.input().load()? {
        LoadedInput::Answers(answers) => normalize(&answers, &pricing.pricing),
        LoadedInput::Request(request) => request,
    };
    tracing::debug!("Normalized request: {:?}", request);

    let calculator = pricing.calculator_name().to_string();
    let currency = pricing.pricing.currency.clone();
    let engine = QuoteEngine::new(pricing);
    let result = engine.quote(&request);

    if result.is_empty() {
        tracing::warn!("Request is incomplete, no service could be priced");
    } else {
        tracing::info!(
            "💰 Monthly price: {} {} ({} breakdown lines)",
            result.monthly_price,
            currency,
            result.breakdown.len()
        );
    }

    let report = QuoteReport::new(calculator, currency, request, result);
    match config.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => print!("{}", report.to_csv()?),
    }

    Ok(())
}
