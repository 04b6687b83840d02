// Heartline - emotion-aware supportive replies
// Main entry point

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal, Read};

use heartline::config::{load_config, Config};
use heartline::pipeline::ResolutionPipeline;
use heartline::server::ReplyServer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "heartline")]
#[command(about = "Emotion-aware supportive replies", version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Reply to one message and show the emotion analysis
    Chat {
        /// Message text
        message: String,
    },
    /// Reply to one message as JSON
    Json {
        /// Message text
        message: String,
    },
    /// Classify one message without generating a reply
    Emotion {
        /// Message text
        message: String,
    },
    /// Run the HTTP server
    Serve {
        /// Bind address (default from config, else 127.0.0.1:8000)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let mut config = load_config()?;

    match args.command {
        Some(Command::Chat { message }) => {
            let pipeline = build_pipeline(&config)?;
            print_reply(&pipeline, &message).await;
        }
        Some(Command::Json { message }) => {
            let pipeline = build_pipeline(&config)?;
            print_json(&pipeline, &message).await?;
        }
        Some(Command::Emotion { message }) => {
            let pipeline = build_pipeline(&config)?;
            let value = pipeline.detect_json(&message).await;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Some(Command::Serve { bind }) => {
            if let Some(bind) = bind {
                config.server.bind_address = bind;
            }
            let pipeline = build_pipeline(&config)?;
            ReplyServer::new(pipeline, config.server.clone()).serve().await?;
        }
        None => {
            let pipeline = build_pipeline(&config)?;
            if io::stdin().is_terminal() {
                run_repl(&pipeline).await?;
            } else {
                // Piped input: answer once
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .context("Failed to read stdin")?;
                print_reply(&pipeline, &input).await;
            }
        }
    }

    Ok(())
}

fn build_pipeline(config: &Config) -> Result<ResolutionPipeline> {
    ResolutionPipeline::from_config(config).context("Failed to initialize reply pipeline")
}

async fn print_reply(pipeline: &ResolutionPipeline, message: &str) {
    let (response, analysis) = pipeline.respond(message).await;
    println!("{}\n", response);
    println!("{}", analysis);
}

async fn print_json(pipeline: &ResolutionPipeline, message: &str) -> Result<()> {
    let value = pipeline.respond_json(message).await;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Interactive loop; Ctrl-C or Ctrl-D exits
async fn run_repl(pipeline: &ResolutionPipeline) -> Result<()> {
    use rustyline::error::ReadlineError;

    let mut editor = rustyline::DefaultEditor::new().context("Failed to start line editor")?;

    let (greeting, _) = pipeline.respond("").await;
    println!("{}\n", greeting);

    loop {
        match editor.readline("you> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                print_reply(pipeline, &line).await;
                println!();
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Failed to read input"),
        }
    }

    Ok(())
}

/// Initialize tracing to stderr
///
/// Default: INFO, overridable with RUST_LOG. HEARTLINE_DEBUG=1 forces DEBUG.
fn init_tracing() {
    let show_debug = std::env::var("HEARTLINE_DEBUG")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let env_filter = if show_debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    // Bridge log crate → tracing (for dependencies using log crate)
    tracing_log::LogTracer::init().ok();
}
