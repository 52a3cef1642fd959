use anyhow::Result;
use clap::Parser;
use log::{error, info};

use strategy_builder::{
    config::BuilderConfig, error::BuilderError, persistence, session::Session, StrategyBuilder,
};

mod args;

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Resolve configuration (file < env < command line)
    let config = BuilderConfig::load(args.config.as_deref())?
        .with_overrides(args.catalog.clone(), args.select.clone());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();
    info!("Starting strategy builder with {:?}", config);

    // 2. Load catalog
    let catalog = match persistence::load_catalog(&config.catalog_path) {
        Ok(catalog) => catalog,
        Err(reason) => {
            let err = BuilderError::Catalog {
                path: config.catalog_path.clone(),
                reason,
            };
            error!("{}", err);
            return Err(err.into());
        }
    };

    // 3. Run the interactive session on stdin/stdout
    let builder = StrategyBuilder::new(catalog, config.selected_pool_ids());
    let stdout = std::io::stdout();
    let mut session = Session::new(builder, stdout.lock());
    session.run(std::io::stdin().lock())?;

    Ok(())
}
