use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rawtext::{
    config::Config,
    extractor,
    models::{DocumentFormat, UploadedFile},
    server,
    utils,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rawtext")]
#[command(about = "Extract cleaned plain text from PDF, Word and text documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP extraction service
    Serve {
        /// Path to settings.toml (default: config/settings.toml if present)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,
        /// Bind address (overrides config and RAWTEXT_BIND)
        #[arg(long)]
        bind: Option<String>,
        /// Port (overrides config and PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Extract text from a local file and print it
    Extract {
        /// Document to read
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Format (pdf, docx, txt); inferred from the extension when omitted
        #[arg(long)]
        format: Option<DocumentFormat>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind, port } => {
            let mut config = Config::load(config.as_deref())?;
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::serve(config).await?;
        }
        Commands::Extract { file, format } => {
            let format = match format {
                Some(format) => format,
                None => utils::detect_format(&file).with_context(|| {
                    format!(
                        "Cannot tell the format of {}; pass --format pdf|docx|txt",
                        file.display()
                    )
                })?,
            };

            let bytes = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let upload = UploadedFile::new(
                file.file_name().map(|n| n.to_string_lossy().into_owned()),
                bytes,
            );
            info!(format = %format, file = upload.display_name(), bytes = upload.bytes.len(), "extracting");

            let text = extractor::extract(format, upload.bytes)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read {} file: {}", format.label(), e))?;
            println!("{}", text);
        }
    }

    Ok(())
}
