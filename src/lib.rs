// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Organigrama: org chart hierarchy reconstruction and filtering.
//!
//! Raw position/person feeds go through the normalizer ([`format`]), get rebuilt into a
//! single-rooted tree ([`build`]), and are cut down to ancestor-closed subsets ([`query`]) for
//! the chart renderer. [`view`] holds the per-page state, [`access`] decides what a viewer may
//! see, and [`source`] / [`store`] sit at the fetch boundary.

pub mod access;
pub mod build;
pub mod config;
pub mod format;
pub mod model;
pub mod query;
pub mod render;
pub mod source;
pub mod store;
pub mod view;
