//! Layered request example
//!
//! Demonstrates error path annotation across three layers.
//!
//! A request travels handler → service → storage. A failure injected at
//! any layer is annotated there and merged on the way back up. The full
//! path goes to the log; the client only sees the short error.
//!
//! Usage:
//!   layered --user alice
//!   layered --user alice --fail-at storage -v
//!   layered --catalog errors.toml --fail-at service

mod handler;
mod service;
mod storage;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use errpath::{Annotate, Catalog, CatalogError, InitError, SharedAnnotator};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "layered")]
#[command(version, about = "Error path annotation across three layers")]
struct Args {
    /// Error catalog (TOML) overriding the built-in messages
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// User to look up
    #[arg(short, long, default_value = "alice")]
    user: String,

    /// Layer at which to inject a failure
    #[arg(long, value_enum, default_value_t = FailAt::None)]
    fail_at: FailAt,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FailAt {
    None,
    Storage,
    Service,
}

#[derive(Debug, thiserror::Error)]
enum SetupError {
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Init(#[from] InitError),
}

fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .init();
}

/// Initialize one layer from the catalog if it names the domain, else
/// from the layer's built-in messages.
fn init_layer(
    catalog: Option<&Catalog>,
    domain: &str,
    shared: &SharedAnnotator,
    builtin: fn() -> Result<(), InitError>,
) -> Result<(), SetupError> {
    match catalog {
        Some(c) if c.domain(domain).is_some() => c.init_shared(domain, shared)?,
        _ => builtin()?,
    }
    info!(domain, origin = %shared.annotator().origin(), "layer initialized");
    Ok(())
}

fn setup(args: &Args) -> Result<(), SetupError> {
    let catalog = args.catalog.as_deref().map(Catalog::load).transpose()?;
    let catalog = catalog.as_ref();

    init_layer(catalog, storage::DOMAIN, &storage::ERRORS, storage::init)?;
    init_layer(catalog, service::DOMAIN, &service::ERRORS, service::init)?;
    init_layer(catalog, handler::DOMAIN, &handler::ERRORS, handler::init)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    if let Err(e) = setup(&args) {
        error!(error = %e, "setup failed");
        process::exit(2);
    }

    let fail_storage = args.fail_at == FailAt::Storage;
    let corrupt = args.fail_at == FailAt::Service;

    match handler::handle(&args.user, fail_storage, corrupt) {
        Ok(body) => println!("200 {body}"),
        Err(e) => {
            e.report();
            println!("500 {}", e.short_error());
            process::exit(1);
        }
    }
}
