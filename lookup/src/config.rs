use std::{path::Path, time::Duration};

use anyhow::Result;
use common::file::SyncLoadFromTomlFile;
use serde::Deserialize;
use url::Url;

use crate::page::{MAX_PAGE_SIZE, clamp_page_size};

pub const DEFAULT_CONFIG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/configs/config.toml"));

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct Network {
    url: Url,
    #[serde(default = "default_timeout")]
    timeout: Duration,
}

#[derive(Deserialize, Default)]
struct Application {
    token: String,
}

#[derive(Deserialize)]
struct Lookup {
    page_size: u32,
}

#[derive(Deserialize, Default)]
pub struct Config {
    network: Network,
    application: Application,
    #[serde(default)]
    lookup: Lookup,
}

impl Config {
    /// Loads the config at `path`, writing the bundled default there first if it is missing.
    pub fn parse(path: &Path) -> Result<Self> {
        Self::from_file_or_default(path, DEFAULT_CONFIG)
    }

    pub fn url(&self) -> &Url {
        &self.network.url
    }

    pub fn timeout(&self) -> &Duration {
        &self.network.timeout
    }

    pub fn token(&self) -> &str {
        &self.application.token
    }

    pub fn page_size(&self) -> u32 {
        clamp_page_size(self.lookup.page_size)
    }
}

impl Default for Network {
    fn default() -> Self {
        Self {
            url: Url::parse("https://localhost:8080/api/application/").expect("Invalid URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for Lookup {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
        }
    }
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl SyncLoadFromTomlFile for Config {}
