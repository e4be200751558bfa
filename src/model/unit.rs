// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

/// A business unit, cost center, or department: a code plus its display name.
///
/// Either half may be empty when the source feed omits it. Filters compare on `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OrgUnit {
    code: String,
    name: String,
}

impl OrgUnit {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.name.is_empty()
    }

    /// Fills empty halves from `fallback`, keeping whatever this unit already has.
    pub fn or_fill_from(self, fallback: &OrgUnit) -> Self {
        Self {
            code: if self.code.is_empty() {
                fallback.code.clone()
            } else {
                self.code
            },
            name: if self.name.is_empty() {
                fallback.name.clone()
            } else {
                self.name
            },
        }
    }
}
