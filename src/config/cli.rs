use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "mushroom-basket")]
#[command(about = "In-memory tracking service for mushrooms and capacity-limited baskets")]
pub struct CliConfig {
    /// TOML file with records to load before serving requests.
    #[arg(long)]
    pub seed: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
