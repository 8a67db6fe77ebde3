//! Server configuration from environment variables
//!
//! Environment:
//! - COUNTDOWN_HOST: bind address (default 127.0.0.1)
//! - PORT: bind port (default 8000)
//! - COUNTDOWN_DATA_FILE: event document path (default ./events.json)
//! - COUNTDOWN_STORAGE: `file` or `memory` (default file)
//! - COUNTDOWN_REQUIRE_FUTURE_DATES: reject submissions dated today or earlier (default true)

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;

use crate::error::StorageResult;
use crate::store::{JsonFileStore, MemoryStore, StoreBackend};
use crate::validation::ValidationPolicy;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_FILE: &str = "events.json";

/// Which backend keeps the event document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageKind {
    File(PathBuf),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub storage: StorageKind,
    pub require_future_dates: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            storage: StorageKind::File(PathBuf::from(DEFAULT_DATA_FILE)),
            require_future_dates: true,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(&current_dir, |key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; relative data paths resolve against `base_dir`
    pub fn from_lookup<F>(base_dir: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = parse_or_default(&lookup, "COUNTDOWN_HOST", defaults.host);
        let port = parse_or_default(&lookup, "PORT", defaults.port);
        let require_future_dates = match lookup("COUNTDOWN_REQUIRE_FUTURE_DATES") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "invalid COUNTDOWN_REQUIRE_FUTURE_DATES, using default");
                defaults.require_future_dates
            }),
            None => defaults.require_future_dates,
        };

        let data_file = lookup("COUNTDOWN_DATA_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        let data_file = if data_file.is_absolute() {
            data_file
        } else {
            base_dir.join(data_file)
        };

        let storage = match lookup("COUNTDOWN_STORAGE").as_deref().map(str::trim) {
            None | Some("") | Some("file") => StorageKind::File(data_file),
            Some("memory") => StorageKind::Memory,
            Some(other) => {
                warn!(value = %other, "unknown COUNTDOWN_STORAGE, using file storage");
                StorageKind::File(data_file)
            }
        };

        Self {
            host,
            port,
            storage,
            require_future_dates,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            require_future_date: self.require_future_dates,
        }
    }

    /// Open the configured backend
    pub fn open_backend(&self) -> StorageResult<Arc<dyn StoreBackend>> {
        Ok(match &self.storage {
            StorageKind::File(path) => Arc::new(JsonFileStore::open(path)?),
            StorageKind::Memory => Arc::new(MemoryStore::new()),
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "invalid configuration value, using default");
            default
        }),
        None => default,
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
