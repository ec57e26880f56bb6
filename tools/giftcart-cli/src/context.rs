//! Shared command context: resolved store config and output handle.

use anyhow::{Context as _, Result};
use giftcart_commerce::prelude::*;

use crate::output::Output;

/// Context shared by every command.
pub struct Context {
    pub config: StoreConfig,
    pub output: Output,
}

impl Context {
    /// Load the store config from `path`, or fall back to the built-in store.
    pub fn load(path: Option<&str>, output: Output) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading store config {path}"))?;
                let config = StoreConfig::from_toml_str(&raw)
                    .with_context(|| format!("parsing store config {path}"))?;
                output.debug(&format!("loaded store config from {path}"));
                config
            }
            None => StoreConfig::default(),
        };
        Ok(Self { config, output })
    }

    /// Build a fresh engine from the loaded config.
    pub fn engine(&self) -> Result<CartEngine> {
        self.config
            .clone()
            .into_engine()
            .context("building cart engine")
    }
}
