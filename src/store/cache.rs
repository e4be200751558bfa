// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CacheConfig;

#[derive(Debug)]
pub enum CacheError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cache io error at {path:?}: {source}"),
            Self::Json { path, source } => {
                write!(f, "cache entry {path:?} is not valid json: {source}")
            }
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// On-disk entry: the document plus its expiry in unix milliseconds.
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    expiry: u64,
    value: Value,
}

/// A directory of `<key>.json` entries, each valid for `ttl` after it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCache {
    dir: PathBuf,
    ttl: Duration,
}

impl DocumentCache {
    pub fn new(dir: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            dir: dir.into(),
            ttl,
        }
    }

    /// `None` when no cache directory is configured.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        let dir = config.dir.as_ref()?;
        Some(Self::new(
            dir,
            Duration::from_secs(config.ttl_minutes.saturating_mul(60)),
        ))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }

    pub fn get(&self, key: &str) -> Result<Option<Value>, CacheError> {
        self.get_at(key, SystemTime::now())
    }

    /// Looks `key` up as of `now`. Expired and unreadable entries are deleted and reported as
    /// misses.
    pub fn get_at(&self, key: &str, now: SystemTime) -> Result<Option<Value>, CacheError> {
        let path = self.entry_path(key);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        let entry: CacheEntry = match serde_json::from_slice(&bytes) {
            Ok(entry) => entry,
            Err(err) => {
                log::debug!("discarding corrupt cache entry {path:?}: {err}");
                self.remove_path(&path)?;
                return Ok(None);
            }
        };

        if unix_millis(now) > entry.expiry {
            log::debug!("cache entry {key:?} expired");
            self.remove_path(&path)?;
            return Ok(None);
        }

        Ok(Some(entry.value))
    }

    pub fn set(&self, key: &str, value: &Value) -> Result<(), CacheError> {
        self.set_at(key, value, SystemTime::now())
    }

    /// Stores `value` as if written at `now`. The entry is written to a temp file and renamed
    /// into place.
    pub fn set_at(&self, key: &str, value: &Value, now: SystemTime) -> Result<(), CacheError> {
        let path = self.entry_path(key);
        let ttl_millis = u64::try_from(self.ttl.as_millis()).unwrap_or(u64::MAX);
        let entry = CacheEntry {
            expiry: unix_millis(now).saturating_add(ttl_millis),
            value: value.clone(),
        };
        let bytes = serde_json::to_vec(&entry).map_err(|source| CacheError::Json {
            path: path.clone(),
            source,
        })?;
        write_atomic(&self.dir, &path, &bytes)
    }

    pub fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.remove_path(&self.entry_path(key))
    }

    fn remove_path(&self, path: &Path) -> Result<(), CacheError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

fn unix_millis(time: SystemTime) -> u64 {
    let millis = time
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    u64::try_from(millis).unwrap_or(u64::MAX)
}

fn write_atomic(dir: &Path, path: &Path, contents: &[u8]) -> Result<(), CacheError> {
    fs::create_dir_all(dir).map_err(|source| CacheError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = dir.join(format!(".organigrama.tmp.{file_name}.{nanos}"));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| CacheError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| CacheError::Io {
        path: tmp_path.clone(),
        source,
    })?;
    drop(file);

    if let Err(source) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CacheError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
