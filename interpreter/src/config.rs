// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "principale.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub execution: ConfigSectionExecution,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionExecution {
    /// Dump the symbol table after the program has run.
    pub show_symbol_table: bool,
}

impl ConfigRoot {
    /// Loads `principale.toml` from the directory of `source_path`. A missing
    /// file gives the default configuration.
    pub fn load_next_to(source_path: &Path) -> anyhow::Result<Self> {
        let path = config_path_for(source_path);

        if !path.is_file() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

fn config_path_for(source_path: &Path) -> PathBuf {
    source_path.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(CONFIG_FILE_NAME)
}
