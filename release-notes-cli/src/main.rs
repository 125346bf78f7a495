use std::time::Duration;

use release_notes_core::{
    dotenv, generate_release_notes, style, Config, ProgressBar, ProgressStyle,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // load environment variables from .env file if present
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!(
            "{} {} {}",
            style("❌"),
            style("error:").red().bold(),
            style(&e).red()
        );
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // missing variables are reported as warnings by the generator
    let config = Config::from_env();
    tracing::debug!(?config, "loaded release notes configuration");

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("📝 generating release notes with {}...", config.model));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = generate_release_notes(&config).await;
    spinner.finish_and_clear();
    let notes = result?;

    println!(
        "{} {}",
        style("✅ release notes written to").green().bold(),
        style(format!("{} ({} bytes)", notes.path.display(), notes.bytes)).yellow()
    );
    Ok(())
}
