use crate::cli::CommonArgs;
use crate::error::{Result, ResultExt};
use changelog::ChangelogConfig;
use std::env;

/// Environment variable consulted when the configuration carries no token
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Loads the configuration file, if any, and applies command line overrides
pub fn resolve(common: &CommonArgs) -> Result<ChangelogConfig> {
    let mut config = ChangelogConfig::load_or_default(common.config.as_deref())
        .with_context(|| "Failed to load configuration")?;

    if let Some(file) = &common.file {
        config.document = file.clone();
    }
    config.verbose |= common.verbose;
    if config.github.token.is_none() {
        config.github.token = env::var(GITHUB_TOKEN_VAR).ok().filter(|t| !t.is_empty());
    }

    Ok(config)
}
