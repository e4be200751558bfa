// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canonical node types shared by the builder, filter, and view layers.
//!
//! Two node families exist: positions (by-position view) and people (by-person view). Both
//! expose `id`/`parentId` through [`HierarchyNode`] and their display units through
//! [`ChartNode`].

pub(crate) mod fixtures;
pub mod ids;
pub mod node;
pub mod person;
pub mod position;
pub mod unit;

pub use ids::{IdError, NodeFamily, NodeId};
pub use node::{ChartNode, HierarchyNode};
pub(crate) use node::Relink;
pub use person::{HierarchyLevel, NodeKind, PersonNode};
pub use position::{Employee, PositionNode, PositionStatus};
pub use unit::OrgUnit;
