// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence on disk.
//!
//! The store module keeps fetched documents in a small TTL cache so repeated chart loads can
//! skip the fetch layer.

pub mod cache;

pub use cache::{CacheError, DocumentCache};
