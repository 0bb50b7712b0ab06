//! Effective configuration command

use crate::app::{ConfigArgs, OutputFormat};
use anyhow::Result;
use linkrank_core::RankConfig;

/// Print the configuration a `rank` run with the same flags would use
pub fn run(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    let config = super::resolve_config(&args.params)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        _ => {
            print!("{}", serde_yaml::to_string(&config)?);
            if args.params.config.is_none() {
                println!("# default path: {}", RankConfig::default_path().display());
            }
        }
    }
    Ok(())
}
