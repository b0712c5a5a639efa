// ABOUTME: Configuration for gsync: remote name, remote branch and commit message
// Layered TOML files: user (~/.gsync/config.toml), then project (.gsync/config.toml),
// then an explicit --config file, each overriding the previous.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Name of the secondary remote
    pub remote: String,

    /// Branch on the remote that receives the squashed commit
    pub branch: String,

    /// Message of the temporary commit created by push
    pub commit_message: String,
}

fn default_remote() -> String {
    "gsync".to_string()
}

fn default_branch() -> String {
    "gsync".to_string()
}

fn default_commit_message() -> String {
    "gsync auto commit".to_string()
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
            commit_message: default_commit_message(),
        }
    }
}

/// One config file as written on disk; absent keys leave the lower layer untouched
#[derive(Debug, Default, Deserialize)]
struct ConfigLayer {
    remote: Option<String>,
    branch: Option<String>,
    commit_message: Option<String>,
}

impl SyncConfig {
    /// Load configuration for a working directory, optionally with an explicit file on top
    pub fn load(working_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths(working_dir) {
            if path.exists() {
                config.merge(Self::read_layer(&path)?);
            }
        }

        if let Some(path) = explicit {
            config.merge(Self::read_layer(path)?);
        }

        debug!(
            remote = %config.remote,
            branch = %config.branch,
            "Loaded sync configuration"
        );
        Ok(config)
    }

    /// `<remote>/<branch>`, the ref that pull resets onto
    pub fn tracking_ref(&self) -> String {
        format!("{}/{}", self.remote, self.branch)
    }

    /// Configuration file paths, lowest precedence first
    fn get_config_paths(working_dir: &Path) -> Vec<PathBuf> {
        let mut paths = vec![];

        if let Some(dir) = Self::get_user_config_dir() {
            paths.push(dir.join("config.toml"));
        }

        paths.push(working_dir.join(".gsync").join("config.toml"));

        paths
    }

    /// User configuration directory (`~/.gsync`)
    pub fn get_user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".gsync"))
    }

    fn read_layer(path: &Path) -> Result<ConfigLayer> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(remote) = layer.remote.filter(|s| !s.is_empty()) {
            self.remote = remote;
        }
        if let Some(branch) = layer.branch.filter(|s| !s.is_empty()) {
            self.branch = branch;
        }
        if let Some(message) = layer.commit_message.filter(|s| !s.is_empty()) {
            self.commit_message = message;
        }
    }
}
