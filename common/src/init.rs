use std::{
    fs::{self, File},
    path::Path,
};

use anyhow::{Context, Result};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
    WriteLogger,
};

pub struct LookupInit;

impl LookupInit {
    pub fn init_logging(debug: bool, log_file: &Path) -> Result<()> {
        if let Some(parent) = log_file.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).context("Failed to create logs directory")?;
        }

        Self::init_logging_with_writeable(
            debug,
            File::create(log_file).context("Failed to create log file")?,
        )
    }

    pub fn init_logging_with_writeable(debug: bool, log_file: File) -> Result<()> {
        let level = Self::level(debug);
        CombinedLogger::init(vec![
            TermLogger::new(
                level,
                Self::config(debug),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            ),
            WriteLogger::new(level, Self::config(debug), log_file),
        ])
        .context("Failed to init logging crate")
    }

    #[must_use]
    pub fn level(debug: bool) -> LevelFilter {
        if debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    fn config(debug: bool) -> Config {
        if debug {
            ConfigBuilder::new()
                .set_location_level(LevelFilter::Error)
                .build()
        } else {
            ConfigBuilder::new().build()
        }
    }
}
