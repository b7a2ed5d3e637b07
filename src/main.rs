use clap::Parser;
use style_sense::utils::{logger, validation::Validate};
use style_sense::{
    render, CliConfig, ConfigProvider, Consultation, ConsultationEngine, GeminiStylist,
    MockStylist, OutputFormat, Stylist, StylistMode, Theme,
};

async fn consult<S: Stylist>(
    stylist: S,
    consultation: &Consultation,
    theme: &Theme,
    format: OutputFormat,
) -> style_sense::Result<String> {
    let engine = ConsultationEngine::new(stylist);
    let dossier = engine.curate(consultation).await?;
    render(&dossier, theme, format)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting style-sense ({:?} mode)", config.mode());
    tracing::debug!(
        "Endpoint: {}, model: {}, timeout: {}s, format: {:?}",
        config.endpoint,
        config.model,
        config.timeout_seconds,
        config.format
    );

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    let consultation = config.consultation();
    let theme = config.theme();
    let format = config.format;

    let result = match config.mode() {
        StylistMode::Mock => consult(MockStylist::new(), &consultation, &theme, format).await,
        StylistMode::Remote => {
            if config.api_key().is_none() {
                tracing::warn!("API key error! Set GOOGLE_API_KEY or pass --api-key");
            }
            consult(GeminiStylist::new(config), &consultation, &theme, format).await
        }
    };

    match result {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "Consultation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("⚠️ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let code = e.severity().exit_code();
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
