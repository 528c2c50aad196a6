use rusty_handicap::args::{self, Command};
use rusty_handicap::cache::DashboardCache;
use rusty_handicap::{HandicapService, JsonRoundStore, RoundQuery};

use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    // stdout carries the JSON result, so logs go to stderr either way
    let installed = if json {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = installed {
        eprintln!("Warning: logging is disabled, subscriber not installed: {e}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();
    init_tracing(args.json_logs);

    let store = JsonRoundStore::load(&args.data).await?;
    let service = HandicapService::new(Arc::new(store)).with_cache(DashboardCache::new());

    let output: Value = match &args.command {
        Command::Dashboard { player } => serde_json::to_value(service.dashboard(*player).await?)?,
        Command::Rounds {
            player,
            limit,
            course_id,
        } => {
            let query = RoundQuery {
                limit: limit.map(usize::from),
                course_id: course_id.clone(),
            };
            serde_json::to_value(service.round_listing(*player, &query).await?)?
        }
        Command::Series { player, timeframe } => serde_json::to_value(
            service
                .index_series(*player, timeframe.timeframe())
                .await?,
        )?,
        Command::Compare { timeframe } => {
            serde_json::to_value(service.comparison(timeframe.timeframe()).await?)?
        }
        Command::Export => serde_json::to_value(service.export().await?)?,
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => {
            error!("failed to render output: {e}");
            return Err(e.into());
        }
    }
    Ok(())
}
