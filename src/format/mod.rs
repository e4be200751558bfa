// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Record Normalizer.
//!
//! Turns fetched JSON of any recognized shape into canonical records whose fields are all
//! trimmed strings. Nothing here fails: unusable input becomes an empty result.

pub mod document;
pub mod fields;
pub mod person;
pub mod position;

pub use document::{RawDocument, RecordKey};
pub use fields::{is_alphabetic_login, normalize_login};
pub use person::{normalize_people, PersonRecord};
pub use position::{normalize_positions, EmployeeRecord, PositionRecord};
