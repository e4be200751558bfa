// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smol_str::SmolStr;

/// Which identity space a [`NodeId`] belongs to.
///
/// Prefixes never collide, so the same source code can appear in more than one family
/// (a position `00042` and its vacancy placeholder) without clashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeFamily {
    /// `C-<positionCode>`: a position node in the by-position view.
    Position,
    /// `E-<employeeCode>`: a concrete person in the by-person view.
    Employee,
    /// `P-<positionCode>`: a vacant (or virtual) position slot in the by-person view.
    Vacancy,
}

impl NodeFamily {
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Position => "C-",
            Self::Employee => "E-",
            Self::Vacancy => "P-",
        }
    }

    fn from_id(value: &str) -> Option<Self> {
        [Self::Position, Self::Employee, Self::Vacancy]
            .into_iter()
            .find(|family| value.starts_with(family.prefix()))
    }
}

/// A stable, prefixed node identifier handed to the renderer as `id` / `parentId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    value: SmolStr,
}

impl NodeId {
    pub fn new(family: NodeFamily, code: &str) -> Result<Self, IdError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(IdError::Empty);
        }

        let mut value = String::with_capacity(family.prefix().len() + code.len());
        value.push_str(family.prefix());
        value.push_str(code);
        Ok(Self {
            value: SmolStr::new(value),
        })
    }

    pub fn position(code: &str) -> Result<Self, IdError> {
        Self::new(NodeFamily::Position, code)
    }

    pub fn employee(code: &str) -> Result<Self, IdError> {
        Self::new(NodeFamily::Employee, code)
    }

    pub fn vacancy(code: &str) -> Result<Self, IdError> {
        Self::new(NodeFamily::Vacancy, code)
    }

    pub fn family(&self) -> NodeFamily {
        // Only constructible through `new`/`from_str`, both of which enforce a prefix.
        NodeFamily::from_id(&self.value).unwrap_or(NodeFamily::Position)
    }

    /// The source code without its family prefix.
    pub fn code(&self) -> &str {
        &self.value[self.family().prefix().len()..]
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for NodeId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family = NodeFamily::from_id(s).ok_or(IdError::MissingPrefix)?;
        Self::new(family, &s[family.prefix().len()..])
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    MissingPrefix,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("node id code must not be empty"),
            Self::MissingPrefix => f.write_str("node id must start with C-, E- or P-"),
        }
    }
}

impl std::error::Error for IdError {}
