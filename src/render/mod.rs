// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderer boundary.
//!
//! The chart widget consumes a flat node list (`id`, `parentId`, display attributes) as JSON.
//! The plain-text outline is what the CLI prints for a quick look at the tree.

mod text;

use serde::Serialize;

pub use text::{render_outline, OutlineOptions};

/// The node list as a pretty-printed JSON array, in the given order.
pub fn render_json<T: Serialize>(nodes: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(nodes)
}
