use crate::argparse::Commands;
use anyhow::Result;
use tempest::logging;
use tempest::station::{self, sink::Sink, Collector};
use tokio::signal;
use tracing::info;
// Include this module as part of the binary crate, not the library crate
mod argparse;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = argparse::parse();

    let g_level = logging::level(cli.verbose);

    let _guards = logging::init(g_level, cli.console, Some(cli.log_file));

    match cli.command {
        Commands::Listen {
            port,
            output,
            quiet,
            summary,
        } => {
            let port = match port {
                Some(p) => p,
                None => tempest::get_listen_port()?,
            };
            let mut sinks = Vec::new();
            if !quiet {
                sinks.push(Sink::stdout());
            }
            if let Some(path) = output {
                sinks.push(Sink::append(&path).await?);
            }
            let mut collector = Collector::new(sinks, summary);
            tokio::select! {
                result = station::task(port, &mut collector) => result?,
                _ = signal::ctrl_c() => info!("Interrupted, bye"),
            }
        }
        Commands::Replay { file, src, summary } => {
            let mut collector = Collector::new(vec![Sink::stdout()], summary);
            station::replay(&file, src, &mut collector).await?;
        }
    }
    Ok(())
}
