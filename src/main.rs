use clap::Parser;
use std::path::Path;

use mushroom_basket::core::{Containment, EntityStore};
use mushroom_basket::utils::logger;
use mushroom_basket::{BasketService, CliConfig, InMemoryStore, SeedConfig, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting mushroom-basket service");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let service = BasketService::new(InMemoryStore::new());

    if let Some(path) = &config.seed {
        if let Err(e) = load_seed(path, &service) {
            tracing::error!(code = e.code(), "failed to load seed file: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    let session = Session::new(service);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    if let Err(e) = session.run(stdin, stdout).await {
        tracing::error!(code = e.code(), "session failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("input closed, shutting down");
    Ok(())
}

fn load_seed<S: EntityStore + Containment>(
    path: &Path,
    service: &BasketService<S>,
) -> mushroom_basket::Result<()> {
    let seed = SeedConfig::from_file(path)?;
    seed.apply(service)?;
    tracing::info!(
        mushrooms = seed.mushrooms.len(),
        baskets = seed.baskets.len(),
        "seed records loaded"
    );
    Ok(())
}
