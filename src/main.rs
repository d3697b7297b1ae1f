use ansa_core::{config::Config, Dataset, Matcher};
use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ansa",
    about = "ansa — terminal support assistant for healthcare-automation Q&A"
)]
struct Cli {
    /// Ask a single question and print the answer instead of starting the TUI.
    #[arg(trailing_var_arg = true)]
    question: Vec<String>,

    /// Write debug logs to /tmp/ansa-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/ansa-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("ansa debug log started — tail -f /tmp/ansa-debug.log");
    }

    if cli.question.is_empty() {
        ansa_tui::run()
    } else {
        answer_once(&cli.question.join(" "))
    }
}

/// One-shot mode: answer a single question on stdout and exit.
fn answer_once(question: &str) -> Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());
    let dataset = Dataset::load()?;
    let matcher = Matcher::new(dataset, config.matcher.threshold);
    println!("{}", matcher.answer(question).answer);
    Ok(())
}
