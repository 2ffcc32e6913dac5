use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use composable_state::config::DemoConfig;
use composable_state::demo::theme::label;
use composable_state::demo::{parse_script, run_script, DemoState};
use composable_state::logging::init_tracing;

/// Runs the two-component demo headlessly and prints the final state.
#[derive(Debug, Parser)]
#[command(name = "composable-demo", version)]
struct Cli {
    /// Config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma separated intents: inc, dec, reset, click, batch:<n>.
    #[arg(long, default_value = "")]
    script: String,

    /// Print the final state as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DemoConfig::load_from(path),
        None => DemoConfig::load(),
    }
    .context("loading demo config")?;
    let intents = parse_script(&cli.script).context("parsing --script")?;

    tracing::info!(intents = intents.len(), "running demo script");
    let state = run_script(config, intents).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_summary(&state);
    }
    Ok(())
}

fn print_summary(state: &DemoState) {
    println!("count:   {}", state.counter.count);
    println!("theme:   {} ({} clicks)", label(&state.data), state.theme.clicks);
    for notice in &state.data.notices {
        println!("notice:  {}", notice);
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn cli_defaults_to_empty_script() {
        let cli = Cli::try_parse_from(["composable-demo"]).unwrap();
        assert!(cli.script.is_empty());
        assert!(cli.config.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn cli_with_args() {
        let cli = Cli::try_parse_from([
            "composable-demo",
            "--script",
            "inc,click",
            "--json",
            "--config",
            "/tmp/demo.toml",
        ])
        .unwrap();
        assert_eq!(cli.script, "inc,click");
        assert!(cli.json);
        assert_eq!(cli.config.unwrap().to_str(), Some("/tmp/demo.toml"));
    }
}
