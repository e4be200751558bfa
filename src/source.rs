// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Fetch boundary.
//!
//! A [`RecordSource`] hands back the raw JSON document for a view; [`load_view`] runs it through
//! the normalizer and the matching builder. Nothing past the fetch can fail: a failed fetch is
//! an empty chart.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::build::{build_people, build_positions, Hierarchy};
use crate::config::HierarchyConfig;
use crate::format::{normalize_people, normalize_positions, RawDocument};
use crate::model::{PersonNode, PositionNode};
use crate::store::DocumentCache;
use crate::view::ViewMode;

#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The source has no document for this view.
    NotConfigured {
        view: ViewMode,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "{path:?} is not valid json: {source}"),
            Self::NotConfigured { view } => write!(f, "no document configured for the {view} view"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::NotConfigured { .. } => None,
        }
    }
}

pub trait RecordSource {
    fn fetch(&self, view: ViewMode) -> Result<Value, SourceError>;
}

/// Reads each view's document from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSource {
    position: Option<PathBuf>,
    person: Option<PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// One file serving both views (e.g. an `Organigrama` export holding `Cargo` and `Persona`).
    pub fn shared(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            position: Some(path.clone()),
            person: Some(path),
        }
    }

    pub fn with_view(mut self, view: ViewMode, path: impl Into<PathBuf>) -> Self {
        match view {
            ViewMode::Position => self.position = Some(path.into()),
            ViewMode::Person => self.person = Some(path.into()),
        }
        self
    }

    pub fn path(&self, view: ViewMode) -> Option<&Path> {
        match view {
            ViewMode::Position => self.position.as_deref(),
            ViewMode::Person => self.person.as_deref(),
        }
    }
}

impl RecordSource for FileSource {
    fn fetch(&self, view: ViewMode) -> Result<Value, SourceError> {
        let path = self
            .path(view)
            .ok_or(SourceError::NotConfigured { view })?;
        let raw = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&raw).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Serves documents from a [`DocumentCache`] keyed by view name, falling through to `inner`
/// on a miss. Cache failures only cost a refetch.
#[derive(Debug, Clone)]
pub struct CachedSource<S> {
    inner: S,
    cache: DocumentCache,
}

impl<S> CachedSource<S> {
    pub fn new(inner: S, cache: DocumentCache) -> Self {
        Self { inner, cache }
    }

    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: RecordSource> RecordSource for CachedSource<S> {
    fn fetch(&self, view: ViewMode) -> Result<Value, SourceError> {
        match self.cache.get(view.as_str()) {
            Ok(Some(value)) => {
                log::debug!("{view} document served from cache");
                return Ok(value);
            }
            Ok(None) => {}
            Err(err) => log::warn!("ignoring unreadable cache: {err}"),
        }

        let value = self.inner.fetch(view)?;
        if let Err(err) = self.cache.set(view.as_str(), &value) {
            log::warn!("could not cache {view} document: {err}");
        }
        Ok(value)
    }
}

/// A built hierarchy for one of the two views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedView {
    Positions(Hierarchy<PositionNode>),
    People(Hierarchy<PersonNode>),
}

impl LoadedView {
    pub fn empty(view: ViewMode) -> Self {
        match view {
            ViewMode::Position => Self::Positions(Hierarchy::empty()),
            ViewMode::Person => Self::People(Hierarchy::empty()),
        }
    }

    pub fn mode(&self) -> ViewMode {
        match self {
            Self::Positions(_) => ViewMode::Position,
            Self::People(_) => ViewMode::Person,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Positions(hierarchy) => hierarchy.len(),
            Self::People(hierarchy) => hierarchy.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fetch, normalize and build one view. Fetch failures degrade to an empty view.
pub fn load_view<S>(source: &S, view: ViewMode, config: &HierarchyConfig) -> LoadedView
where
    S: RecordSource + ?Sized,
{
    let value = match source.fetch(view) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to load the {view} view: {err}");
            return LoadedView::empty(view);
        }
    };

    let doc = RawDocument::detect(value, view.record_key());
    match view {
        ViewMode::Position => {
            LoadedView::Positions(build_positions(normalize_positions(&doc), config))
        }
        ViewMode::Person => LoadedView::People(build_people(normalize_people(&doc), config)),
    }
}
