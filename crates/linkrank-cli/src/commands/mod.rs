//! CLI command handlers

pub mod config;
pub mod links;
pub mod rank;

use crate::app::ParamArgs;
use anyhow::{Context, Result};
use linkrank_core::RankConfig;

/// Resolve the effective configuration: config file (explicit or default),
/// then `LINKRANK_*` environment variables, then command-line flags.
pub fn resolve_config(params: &ParamArgs) -> Result<RankConfig> {
    let base = match &params.config {
        Some(path) => RankConfig::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => RankConfig::load()?,
    };

    let config = params.apply(base);
    config.validate()?;
    Ok(config)
}
