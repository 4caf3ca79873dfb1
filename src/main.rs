use anyhow::Result;
use clap::Parser;

use pr_reminder::{Config, Outcome};

/// Post a Slack reminder listing the open pull requests and their CI status
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Build the message and print it instead of posting it to Slack
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let loaded = Config::from_env()?;
    let today = chrono::Local::now().date_naive();

    let rt = tokio::runtime::Runtime::new()?;
    let outcome = rt.block_on(pr_reminder::run(loaded, today, cli.dry_run))?;

    if let Outcome::DryRun(payload) = &outcome {
        println!("{}", serde_json::to_string_pretty(payload)?);
    }

    println!("Executado");
    Ok(())
}
