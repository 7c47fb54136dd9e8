use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use hsredshift_core::{Config, Registry};
use hsredshift_ddl::DialectKind;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "hsredshift",
    about = "Hearthstone match-analytics warehouse schema",
    version
)]
struct Cli {
    /// Create every table on this connection after printing the DDL.
    ///
    /// Without a value, [apply].connection from the config file is used.
    #[arg(long, value_name = "CONN", num_args = 0..=1)]
    apply: Option<Option<String>>,
    /// Target dialect (redshift, postgres). Overrides [ddl].dialect.
    #[arg(short, long)]
    dialect: Option<DialectKind>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Sql)]
    format: Format,
    /// Config file (default: ./hsredshift.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Sql,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::from_default_env().add_directive("hsredshift=info".parse()?);
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    if cli.apply.is_some() && cli.format == Format::Json {
        bail!("--format json cannot be combined with --apply");
    }

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;

    let dialect = match (cli.dialect, config.ddl.dialect.as_deref()) {
        (Some(kind), _) => kind,
        (None, Some(name)) => name
            .parse::<DialectKind>()
            .context("invalid [ddl].dialect in config")?,
        (None, None) => DialectKind::default(),
    };

    let connection = match cli.apply {
        None => None,
        Some(Some(url)) => Some(url),
        Some(None) => Some(
            config
                .apply
                .connection
                .context("--apply needs a connection URL or [apply].connection in config")?,
        ),
    };

    let registry = Registry::hearthstone().context("warehouse schema failed validation")?;

    match cli.format {
        Format::Json => commands::print::json(&registry),
        Format::Sql => {
            let statements = commands::print::sql(dialect, &registry)?;
            match connection {
                Some(url) => commands::apply::run(&url, &statements),
                None => Ok(()),
            }
        }
    }
}
