use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use wapoints_scoring::{Calculator, EventPolicy, FallbackRegistry, TableError, TableSet};

use crate::{AppState, DEFAULT_TABLE_VERSION};

#[derive(Debug, Parser, Clone)]
#[command(name = "wapoints", version)]
#[command(about = "Converts track and field performances to scoring points and back")]
pub struct Cli {
    /// Address to listen on.
    #[arg(long, env = "WAPOINTS_BIND", default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// TOML file with scoring table coefficients.
    ///
    /// Without it every lookup misses and only fallbacks can score.
    #[arg(long, env = "WAPOINTS_TABLES")]
    pub tables: Option<PathBuf>,

    /// Value reported as `table_version` in responses.
    #[arg(long, env = "WAPOINTS_TABLE_VERSION", default_value = DEFAULT_TABLE_VERSION)]
    pub table_version: String,

    /// Reject event identifiers outside the known track and field list.
    #[arg(long, env = "WAPOINTS_STRICT_EVENTS")]
    pub strict_events: bool,

    /// Do not register the legacy men's outdoor 100m approximation.
    #[arg(long)]
    pub no_legacy_fallback: bool,
}

impl Cli {
    /// Builds the calculator described by these options.
    ///
    /// # Errors
    ///
    /// Returns an error if the table file cannot be loaded.
    pub fn calculator(&self) -> Result<Calculator, TableError> {
        let tables = match &self.tables {
            Some(path) => TableSet::load(path)?,
            None => TableSet::default(),
        };

        let fallbacks = if self.no_legacy_fallback {
            FallbackRegistry::default()
        } else {
            FallbackRegistry::with_builtin()
        };

        let policy = if self.strict_events {
            EventPolicy::Strict
        } else {
            EventPolicy::Lenient
        };

        Ok(Calculator::new(tables, fallbacks).with_policy(policy))
    }

    /// Builds the shared server state.
    ///
    /// # Errors
    ///
    /// Returns an error if the table file cannot be loaded.
    pub fn app_state(&self) -> Result<AppState, TableError> {
        Ok(AppState::new(self.calculator()?, self.table_version.clone()))
    }
}
