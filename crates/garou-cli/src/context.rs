//! Per-invocation state shared by the commands.

use std::path::PathBuf;

use anyhow::Result;
use garou_core::{AppConfig, CatalogCache, ComboRegister, DataDir, DodgeStartup, MeatyRegister};
use tracing::{debug, warn};

use crate::cli::Args;

pub struct AppContext {
    pub config: AppConfig,
    pub data: DataDir,
    pub catalog: CatalogCache,
}

impl AppContext {
    /// Load configuration and resolve the data directory.
    ///
    /// `--data-dir` wins over the config file, which wins over the platform
    /// data directory.
    pub fn load(args: &Args) -> Self {
        let config = match AppConfig::load(&args.config) {
            Ok(c) => {
                debug!("Loaded config from {:?}", args.config);
                c
            }
            Err(e) => {
                warn!(
                    "Failed to load config {:?}: {}, using defaults",
                    args.config, e
                );
                AppConfig::default()
            }
        };

        let root = args
            .data_dir
            .clone()
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(default_data_dir);
        let data = DataDir::new(root);
        let catalog = CatalogCache::new(data.frame_data());

        Self {
            config,
            data,
            catalog,
        }
    }

    pub fn combos(&self) -> Result<ComboRegister> {
        Ok(ComboRegister::open(self.data.combos())?)
    }

    pub fn meaty(&self) -> Result<MeatyRegister> {
        Ok(MeatyRegister::open(self.data.meaty_moves())?)
    }

    pub fn dodge_startup(&self, character: &str) -> Result<DodgeStartup> {
        Ok(self
            .config
            .dodge_table()
            .lookup(character, self.config.missing_dodge)?)
    }
}

fn default_data_dir() -> PathBuf {
    data_dir_under(dirs::data_dir())
}

/// `<platform data dir>/garou`, or `./data` when the platform has none
fn data_dir_under(platform: Option<PathBuf>) -> PathBuf {
    platform
        .map(|dir| dir.join("garou"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
