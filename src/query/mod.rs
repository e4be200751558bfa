// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over built hierarchies.
//!
//! The filter derives ancestor-closed subsets for the renderer; the option helpers derive the
//! cascading dropdown lists the view controller exposes.

pub mod filter;
pub mod options;

pub use filter::{
    apply_unit_filter, children_index, filter_from_roots, filter_hierarchy, UnitFilter,
};
pub use options::{
    business_unit_options, cost_center_options, department_options, sort_by_title, FilterOption,
};
