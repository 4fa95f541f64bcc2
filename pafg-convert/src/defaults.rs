//! Literal values the FortiGate output falls back to.
//!
//! Every default the emitters write lives here instead of being scattered
//! through the rendering code. The table ships embedded from
//! `mappings/fortigate.toml`; [`load_defaults`] reads an alternative table
//! from disk.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Complete defaults table for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TargetDefaults {
    pub naming: NamingDefaults,
    pub interface: InterfaceDefaults,
    pub static_route: StaticRouteDefaults,
}

/// Interface name rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamingDefaults {
    /// Token substituted for the PAN-OS parent part of a unit name.
    pub prefix: String,
}

/// Settings written into every `config system interface` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InterfaceDefaults {
    pub vdom: String,
    /// Parent interface every VLAN is attached to.
    pub parent: String,
    pub allowaccess: String,
    /// Alias used when the source unit has no comment.
    pub comment: String,
    /// `vlanid` value used when the source unit has no tag.
    pub vlanid: String,
}

/// Settings for `config router static` entries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaticRouteDefaults {
    /// Destination used when the source route has none.
    pub destination: String,
}

/// Errors returned when loading a defaults table.
#[derive(Debug, Error)]
pub enum DefaultsLoadError {
    #[error("failed to read defaults file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse defaults file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl Default for TargetDefaults {
    fn default() -> Self {
        Self {
            naming: NamingDefaults {
                prefix: "VLan-".to_string(),
            },
            interface: InterfaceDefaults {
                vdom: "root".to_string(),
                parent: "Inside-LAGG".to_string(),
                allowaccess: "ping".to_string(),
                comment: "No description".to_string(),
                vlanid: "no vlan".to_string(),
            },
            static_route: StaticRouteDefaults {
                destination: "Unknown".to_string(),
            },
        }
    }
}

/// Load a defaults table from a TOML file.
pub fn load_defaults(path: &Path) -> Result<TargetDefaults, DefaultsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| DefaultsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_defaults(&raw, path.display().to_string())
}

/// The defaults table compiled into the binary.
pub fn embedded_defaults() -> TargetDefaults {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/mappings/fortigate.toml"
    ));
    match parse_defaults(embedded, "embedded defaults".to_string()) {
        Ok(defaults) => defaults,
        Err(err) => {
            tracing::warn!("{err}; using built-in defaults");
            TargetDefaults::default()
        }
    }
}

fn parse_defaults(raw: &str, path: String) -> Result<TargetDefaults, DefaultsLoadError> {
    toml::from_str(raw).map_err(|source| DefaultsLoadError::Parse { path, source })
}
