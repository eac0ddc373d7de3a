use clap::{Args, Parser, Subcommand};
use std::net::IpAddr;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "kokoro", about = "Run the mental-health services backend")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    Run(Run),
    Migrate(Migrate),
}

#[derive(Debug, Clone, Args)]
#[group(multiple = true, required = false)]
pub(crate) struct Db {
    #[arg(long, help = "Min connections")]
    pub(crate) db_min_connections: Option<u32>,

    #[arg(long, help = "Max connections")]
    pub(crate) db_max_connections: Option<u32>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Run {
    #[arg(long)]
    pub(crate) host: Option<IpAddr>,

    #[arg(short, long)]
    pub(crate) port: Option<u16>,

    #[arg(long, env = "DATABASE_URL")]
    pub(crate) database_url: Url,

    #[command(flatten)]
    pub(crate) db: Db,

    #[arg(
        long,
        default_value_t = 5,
        help = "Budget in seconds for a single persistence operation before the request fails"
    )]
    pub(crate) persistence_timeout: u64,

    #[arg(long, help = "Allowed CORS origins; permissive when none are given")]
    pub(crate) origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub(crate) struct Migrate {
    #[arg(long, env = "DATABASE_URL")]
    pub(crate) database_url: Url,
}
