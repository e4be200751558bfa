// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime configuration.
//!
//! Every field has a default matching the behavior of the production feeds, so an empty
//! JSON object (or no config file at all) is a valid configuration.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// What happens to roots other than the kept one after building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
    /// Leave them parentless; they are excluded from the reachable tree.
    #[default]
    Detach,
    /// Hang them under the kept root.
    Reparent,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Position code of the top of the hierarchy; always a root.
    pub top_position_code: String,
    /// Position code of the board grouping excluded from the person view.
    pub directory_position_code: String,
    pub root_policy: RootPolicy,
    /// Create `virtual` placeholders for reported-to positions with no record.
    pub synthesize_missing_positions: bool,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            top_position_code: "00001".to_owned(),
            directory_position_code: "00006".to_owned(),
            root_policy: RootPolicy::Detach,
            synthesize_missing_positions: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Job-title fragments that grant a full view, matched case-insensitively.
    pub keywords: Vec<String>,
    /// Position codes granted a full view regardless of title.
    pub full_access_positions: Vec<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            keywords: [
                "gerente",
                "presidente",
                "jefe",
                "analista de procesos",
                "asistente de desarrollo",
                "ingeniero de desarrollo",
                "analista",
                "coordinador",
                "administrador",
                "auditor",
                "auditor senior",
                "supervisor",
            ]
            .into_iter()
            .map(str::to_owned)
            .collect(),
            full_access_positions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Disabled when unset.
    pub dir: Option<PathBuf>,
    pub ttl_minutes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dir: None,
            ttl_minutes: 30,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrgChartConfig {
    pub hierarchy: HierarchyConfig,
    pub access: AccessConfig,
    pub cache: CacheConfig,
}

impl OrgChartConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidKeyword {
        keyword: String,
        source: Box<regex::Error>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read config {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "invalid config {path:?}: {source}"),
            Self::InvalidKeyword { keyword, source } => {
                write!(f, "access keyword {keyword:?} cannot be compiled: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidKeyword { source, .. } => Some(source.as_ref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OrgChartConfig, RootPolicy};

    #[test]
    fn empty_object_yields_defaults() {
        let config = OrgChartConfig::from_json_str("{}").expect("config");
        assert_eq!(config, OrgChartConfig::default());
        assert_eq!(config.hierarchy.top_position_code, "00001");
        assert_eq!(config.hierarchy.directory_position_code, "00006");
        assert_eq!(config.hierarchy.root_policy, RootPolicy::Detach);
        assert!(config.access.keywords.iter().any(|k| k == "gerente"));
        assert_eq!(config.cache.ttl_minutes, 30);
        assert_eq!(config.cache.dir, None);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = OrgChartConfig::from_json_str(
            r#"{"hierarchy": {"root_policy": "reparent"}, "access": {"keywords": ["director"]}}"#,
        )
        .expect("config");
        assert_eq!(config.hierarchy.root_policy, RootPolicy::Reparent);
        assert_eq!(config.hierarchy.top_position_code, "00001");
        assert_eq!(config.access.keywords, vec!["director".to_owned()]);
        assert!(config.access.full_access_positions.is_empty());
    }

    #[test]
    fn unknown_root_policy_is_rejected() {
        let err = OrgChartConfig::from_json_str(r#"{"hierarchy": {"root_policy": "merge"}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = OrgChartConfig::from_path("/definitely/not/here.json").expect_err("io error");
        assert!(err.to_string().contains("not/here.json"));
    }
}
