use clap::Parser;
use style_sense::utils::{logger, validation::Validate};
use style_sense::{
    build_prompt, render, ConfigProvider, Consultation, ConsultationEngine, GeminiStylist,
    MockStylist, OutputFormat, Stylist, StylistMode, Theme, TomlConfig,
};

#[derive(Parser)]
#[command(name = "toml-stylist")]
#[command(about = "Wardrobe consultation driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "style-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Force the offline lookup-table stylist
    #[arg(long)]
    mock: bool,

    /// Override the output format from config
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Show the prompt and settings without calling the style service
    #[arg(long)]
    dry_run: bool,
}

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

fn display_config_summary(config: &TomlConfig, mode: StylistMode, consultation: &Consultation) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Mode: {:?}", mode);
    if mode == StylistMode::Remote {
        tracing::info!("  Endpoint: {}", config.service_endpoint());
        tracing::info!("  Model: {}", config.model());
        tracing::info!("  Timeout: {}s", config.timeout_seconds());
        tracing::info!(
            "  API key: {}",
            if config.api_key().is_some() { "set" } else { "missing" }
        );
    }
    tracing::info!("  Season: {}", consultation.season);
    tracing::info!("  Hero piece: {}", consultation.request.anchor_piece);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.severity().exit_code());
        }
    };

    let mode = match config.resolve_mode(args.mock) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    };

    if let Err(e) = config.validate_for(mode) {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }

    // validate_for() already parsed every field
    let consultation = config.consultation()?;
    let theme = config.theme()?;
    let format = match args.format {
        Some(format) => format,
        None => config.output_format()?,
    };

    display_config_summary(&config, mode, &consultation);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no request will be sent");
        println!("{}", build_prompt(&consultation));
        return Ok(());
    }

    let result = match mode {
        StylistMode::Mock => consult(MockStylist::new(), &consultation, &theme, format).await,
        StylistMode::Remote => {
            if config.api_key().is_none() {
                tracing::warn!("API key error! Set stylist.api_key or GOOGLE_API_KEY in the config");
            }
            consult(GeminiStylist::new(config), &consultation, &theme, format).await
        }
    };

    match result {
        Ok(output) => println!("{}", output),
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
