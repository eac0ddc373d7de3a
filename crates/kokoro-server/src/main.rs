use crate::opt::{Cli, Commands, Migrate, Run};
use anyhow::Result;
use axum::serve;
use clap::Parser;
use kokoro_db::sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm::ConnectionTrait;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

mod app;
mod net;
mod opt;
mod routes;
mod telemetry;
mod user;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 5000;

const SCHEMA: &str = include_str!("../migrations/schema.sql");

#[derive(Debug)]
pub(crate) struct InnerAppConfig {
    persistence_timeout: Duration,
}

#[derive(Clone, Debug)]
pub(crate) struct AppConfig(Arc<InnerAppConfig>);

impl AppConfig {
    pub(crate) fn new(persistence_timeout: Duration) -> Self {
        Self(Arc::new(InnerAppConfig { persistence_timeout }))
    }

    pub(crate) fn persistence_timeout(&self) -> Duration {
        self.0.persistence_timeout
    }
}

async fn connect(url: &url::Url, db: &opt::Db) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(url.as_str());
    options
        .connect_timeout(Duration::from_secs(10))
        .acquire_timeout(Duration::from_secs(10));
    if let Some(min) = db.db_min_connections {
        options.min_connections(min);
    }
    if let Some(max) = db.db_max_connections {
        options.max_connections(max);
    }
    Ok(Database::connect(options).await?)
}

async fn migrate(opts: Migrate) -> Result<()> {
    let conn = Database::connect(opts.database_url.as_str()).await?;
    tracing::info!("applying schema");
    conn.execute_unprepared(SCHEMA).await?;
    tracing::info!("schema applied");
    Ok(())
}

async fn run(opts: Run) -> Result<()> {
    let conn = connect(&opts.database_url, &opts.db).await?;
    let config = AppConfig::new(Duration::from_secs(opts.persistence_timeout));

    let app = app::create_app(conn, config, opts.origins)?;
    let listener = net::listener(opts.host, opts.port, (DEFAULT_HOST, DEFAULT_PORT)).await?;
    tracing::info!(address = %listener.local_addr()?, "listening");
    serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::setup()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(opts) => run(opts).await,
        Commands::Migrate(opts) => migrate(opts).await,
    }
}
