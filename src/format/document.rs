// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Container detection for fetched documents.
//!
//! Feeds wrap their records in a handful of shapes. [`RawDocument::detect`] recognizes them in
//! a fixed order so the rest of the pipeline only ever sees a flat record list.

use serde_json::Value;

/// The record key a view's documents use (`Cargo` or `Persona`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Cargo,
    Persona,
}

impl RecordKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cargo => "Cargo",
            Self::Persona => "Persona",
        }
    }
}

const ROOT_KEY: &str = "Organigrama";

/// A fetched document, classified by how its records are wrapped.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDocument {
    /// `[ {...}, ... ]`
    BareList(Vec<Value>),
    /// `{ "Cargo": [...] }` or `{ "Cargo": {...} }`
    Keyed(Vec<Value>),
    /// `{ "Organigrama": { "Cargo": [...] } }`
    Nested(Vec<Value>),
    /// Anything else; treated as "no data".
    Unrecognized,
}

impl RawDocument {
    /// Detection order: bare list, `root[key]`, `root.Organigrama[key]`, nothing.
    pub fn detect(value: Value, key: RecordKey) -> Self {
        let mut value = match value {
            Value::Array(items) => return Self::BareList(items),
            other => other,
        };

        if let Some(records) = value.get_mut(key.as_str()).and_then(take_records) {
            return Self::Keyed(records);
        }

        if let Some(records) = value
            .get_mut(ROOT_KEY)
            .and_then(|root| root.get_mut(key.as_str()))
            .and_then(take_records)
        {
            return Self::Nested(records);
        }

        log::warn!(
            "unrecognized document shape: expected a list, `{key}` or `{ROOT_KEY}.{key}` container",
            key = key.as_str()
        );
        Self::Unrecognized
    }

    pub fn records(&self) -> &[Value] {
        match self {
            Self::BareList(records) | Self::Keyed(records) | Self::Nested(records) => records,
            Self::Unrecognized => &[],
        }
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            Self::BareList(records) | Self::Keyed(records) | Self::Nested(records) => records,
            Self::Unrecognized => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

fn take_records(value: &mut Value) -> Option<Vec<Value>> {
    match value.take() {
        Value::Array(items) => Some(items),
        object @ Value::Object(_) => Some(vec![object]),
        _ => None,
    }
}
