use clap::{Parser, Subcommand};
use logogen::{
    logger::{self, LoggerConfig},
    GeminiClient, GeminiConfig, GenerationRequest, ImagePayload, LogoClient, LogoError,
    RefinementRequest,
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "logogen", version, about = "Generate and refine logos with Gemini")]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a logo from a description of the business
    Generate {
        description: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Refine an existing logo with feedback
    Refine {
        /// Previously generated logo
        #[arg(long)]
        image: PathBuf,

        /// MIME type of the image (guessed from the extension if omitted)
        #[arg(long)]
        mime: Option<String>,

        feedback: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List supported image models
    Models,
}

#[derive(clap::Args)]
struct OutputArgs {
    /// Where to write the image (defaults to logo.<ext>)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print a data URI instead of writing a file
    #[arg(long)]
    data_uri: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv_loaded = dotenv::dotenv().is_ok();
    let cli = Cli::parse();

    let logger_config = if cli.verbose {
        LoggerConfig::development()
    } else {
        LoggerConfig::default()
    };
    if let Err(e) = logger::init_with_config(logger_config.with_env_overrides()) {
        eprintln!("{}", e);
    }
    if !dotenv_loaded {
        log::debug!("No .env file found, using system environment variables");
    }

    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    // No command runs without a credential, not even `models`.
    let client = match startup(|name| env::var(name).ok()) {
        Ok(client) => client,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &GeminiClient, command: Command) -> Result<(), LogoError> {
    match command {
        Command::Generate {
            description,
            output,
        } => {
            let request = GenerationRequest::new(description)?;
            let logo = client.logo().generate_request(&request).await?;
            log::info!("✅ Logo generated");
            emit(&logo, &output)
        }
        Command::Refine {
            image,
            mime,
            feedback,
            output,
        } => {
            let prior = load_image(&image, mime)?;
            let request = RefinementRequest::new(prior, feedback)?;
            let logo = client.logo().refine_request(&request).await?;
            log::info!("✅ Logo refined");
            emit(&logo, &output)
        }
        Command::Models => {
            for (id, name, provider) in LogoClient::supported_models() {
                println!("{}  {} ({})", id, name, provider);
            }
            Ok(())
        }
    }
}

fn startup<F>(lookup: F) -> Result<GeminiClient, LogoError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = GeminiConfig::from_lookup(lookup)?;
    logger::log_config_info(&config);
    GeminiClient::new(config)
}

fn load_image(path: &Path, mime: Option<String>) -> Result<ImagePayload, LogoError> {
    let mime = mime.unwrap_or_else(|| {
        mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    });
    if !mime.starts_with("image/") {
        return Err(LogoError::InvalidInput(format!(
            "{} does not look like an image ({}); pass --mime",
            path.display(),
            mime
        )));
    }
    let raw = fs::read(path)?;
    Ok(ImagePayload::from_raw(&raw, mime))
}

fn emit(logo: &ImagePayload, output: &OutputArgs) -> Result<(), LogoError> {
    if output.data_uri {
        println!("{}", logo.to_data_uri());
        return Ok(());
    }

    let path = output
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("logo.{}", logo.file_extension())));
    fs::write(&path, logo.decode()?)?;
    log::info!("💾 Logo saved to: {}", path.display());
    println!("{}", path.display());
    Ok(())
}
