//! Bot configuration loaded from the environment.
//!
//! The privileged-user set is supplied externally (env list and/or a JSON
//! role file) so no specific username is hardcoded in the routing logic.

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Runtime configuration for the bot
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Usernames that resolve to the privileged identity class
    pub privileged_users: HashSet<String>,
    /// Path of the static info text shown by the info action
    pub info_file: PathBuf,
    /// Directory scanned for the random image reply
    pub images_dir: PathBuf,
    /// Number of rows returned by the logs report
    pub log_page_size: i64,
}

/// Role → usernames mapping, as stored in the optional JSON role file
#[derive(Debug, Deserialize)]
struct RoleFile {
    #[serde(default)]
    privileged: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            privileged_users: HashSet::new(),
            info_file: PathBuf::from("info.txt"),
            images_dir: PathBuf::from("/cats"),
            log_page_size: 20,
        }
    }
}

impl BotConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset. `PRIVILEGED_USERS` is a comma-separated
    /// username list; `ROLES_FILE` optionally points at a JSON role file
    /// whose `privileged` entries are merged in.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(list) = env::var("PRIVILEGED_USERS") {
            config.privileged_users.extend(parse_user_list(&list));
        }

        if let Ok(path) = env::var("ROLES_FILE") {
            let roles = read_role_file(&path)
                .with_context(|| format!("Failed to read role file {path}"))?;
            config.privileged_users.extend(roles.privileged);
        }

        if let Ok(path) = env::var("INFO_FILE") {
            config.info_file = PathBuf::from(path);
        }
        if let Ok(path) = env::var("IMAGES_DIR") {
            config.images_dir = PathBuf::from(path);
        }
        if let Ok(size) = env::var("LOG_PAGE_SIZE") {
            config.log_page_size = parse_page_size(&size)?;
        }

        info!(
            "Configuration loaded: {} privileged user(s), info file {:?}, images dir {:?}",
            config.privileged_users.len(),
            config.info_file,
            config.images_dir
        );

        Ok(config)
    }
}

/// Split a comma-separated username list, dropping empty segments
pub fn parse_user_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the logs page size, rejecting zero and negative values before
/// they can reach the `LIMIT` clause of the logs query
fn parse_page_size(raw: &str) -> Result<i64> {
    let size: i64 = raw
        .trim()
        .parse()
        .context("LOG_PAGE_SIZE must be a positive integer")?;
    anyhow::ensure!(size > 0, "LOG_PAGE_SIZE must be positive, got {size}");
    Ok(size)
}

fn read_role_file(path: &str) -> Result<RoleFile> {
    let content = fs::read_to_string(path)?;
    let roles = serde_json::from_str(&content)?;
    Ok(roles)
}
