// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View Controller.
//!
//! Owns everything the chart page holds between refreshes: the active view, the built node
//! set, the filter selection, the cascading option lists and the viewer lock.

mod controller;

use std::fmt;
use std::str::FromStr;

use crate::format::RecordKey;
use crate::query::UnitFilter;

pub use controller::{ControllerError, ViewController};

/// Current business-unit / cost-center / department selection.
pub type FilterSelection = UnitFilter;

/// Which hierarchy the chart shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// By cargo: one node per position.
    Position,
    /// By persona: one node per occupant or vacancy.
    #[default]
    Person,
}

impl ViewMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Person => "person",
        }
    }

    pub const fn record_key(self) -> RecordKey {
        match self {
            Self::Position => RecordKey::Cargo,
            Self::Person => RecordKey::Persona,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownViewMode(String);

impl fmt::Display for UnknownViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view {:?} (expected position or person)", self.0)
    }
}

impl std::error::Error for UnknownViewMode {}

impl FromStr for ViewMode {
    type Err = UnknownViewMode;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "position" | "cargo" => Ok(Self::Position),
            "person" | "persona" => Ok(Self::Person),
            _ => Err(UnknownViewMode(raw.to_owned())),
        }
    }
}
