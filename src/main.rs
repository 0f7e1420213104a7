//! Stock Prediction AI
//!
//! Predicts tomorrow's stock movement from recent news and market signals.

use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use stock_predictor::{config::Config, pipeline::Pipeline, render};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "stock-predictor")]
#[command(about = "Predict tomorrow's stock movement using real news and market signals")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict one ticker (prompts when omitted)
    Predict {
        /// Stock ticker, e.g. AAPL, TSLA, SHOP.TO
        ticker: Option<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the web page
    Serve {
        /// Address to listen on
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("stock_predictor=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    match cli.command {
        None => predict(&config, None, false).await,
        Some(Commands::Predict { ticker, json }) => predict(&config, ticker, json).await,
        Some(Commands::Serve { bind }) => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let pipeline = Pipeline::from_config(&config)?;
            render::web::serve(pipeline, &bind).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn predict(config: &Config, ticker: Option<String>, json: bool) -> anyhow::Result<ExitCode> {
    let raw = match ticker {
        Some(t) => t,
        None => prompt_ticker()?,
    };

    let pipeline = Pipeline::from_config(config)?;
    render::terminal::run_prediction(&pipeline, &raw, json, &mut io::stdout(), &mut io::stderr()).await
}

fn prompt_ticker() -> io::Result<String> {
    print!("Enter a stock ticker (e.g., AAPL, TSLA, SHOP.TO): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
