// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Serialize, Serializer};

use super::ids::NodeId;
use super::node::{ChartNode, HierarchyNode, Relink};
use super::unit::OrgUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    #[serde(rename = "persona")]
    Person,
    #[serde(rename = "vacante")]
    Vacant,
    /// Placeholder for a reported-to position that has no record of its own.
    #[serde(rename = "virtual")]
    Virtual,
}

/// Hierarchy level reported by the source, or `Unknown` when missing or out of range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HierarchyLevel {
    Level(u8),
    #[default]
    Unknown,
}

impl HierarchyLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<u8>() {
            Ok(level) if (Self::MIN..=Self::MAX).contains(&level) => Self::Level(level),
            _ => Self::Unknown,
        }
    }

    pub fn get(self) -> Option<u8> {
        match self {
            Self::Level(level) => Some(level),
            Self::Unknown => None,
        }
    }
}

impl Serialize for HierarchyLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Level(level) => serializer.serialize_u8(*level),
            Self::Unknown => serializer.serialize_none(),
        }
    }
}

/// One node of the by-person view: a concrete occupant, a vacant slot, or a virtual slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonNode {
    pub(crate) id: NodeId,
    pub(crate) parent_id: Option<NodeId>,
    #[serde(rename = "tipo")]
    pub(crate) kind: NodeKind,
    pub(crate) employee_code: String,
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) title: String,
    pub(crate) business_unit: OrgUnit,
    pub(crate) cost_center: OrgUnit,
    pub(crate) department: OrgUnit,
    pub(crate) email: String,
    pub(crate) photo: String,
    pub(crate) hire_date: String,
    pub(crate) manual_path: String,
    pub(crate) login: String,
    pub(crate) level: HierarchyLevel,
    pub(crate) position_code: String,
    pub(crate) reports_to_code: String,
}

impl PersonNode {
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_vacant(&self) -> bool {
        self.kind != NodeKind::Person
    }

    /// Empty for vacant and virtual nodes.
    pub fn employee_code(&self) -> &str {
        &self.employee_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn display_name(&self) -> String {
        match self.kind {
            NodeKind::Person => format!("{} {}", self.name, self.surname)
                .trim()
                .to_owned(),
            NodeKind::Vacant | NodeKind::Virtual => "VACANTE".to_owned(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn hire_date(&self) -> &str {
        &self.hire_date
    }

    pub fn manual_path(&self) -> &str {
        &self.manual_path
    }

    /// Normalized login (see [`crate::format::normalize_login`]).
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn level(&self) -> HierarchyLevel {
        self.level
    }

    /// Reported-to code as it appeared on the record (cleared for the top position).
    pub fn reports_to_code(&self) -> &str {
        &self.reports_to_code
    }
}

impl HierarchyNode for PersonNode {
    fn id(&self) -> &NodeId {
        &self.id
    }

    fn parent_id(&self) -> Option<&NodeId> {
        self.parent_id.as_ref()
    }

    fn position_code(&self) -> &str {
        &self.position_code
    }
}

impl Relink for PersonNode {
    fn set_parent_id(&mut self, parent_id: Option<NodeId>) {
        self.parent_id = parent_id;
    }
}

impl ChartNode for PersonNode {
    fn title(&self) -> &str {
        &self.title
    }

    fn business_unit(&self) -> &OrgUnit {
        &self.business_unit
    }

    fn cost_center(&self) -> &OrgUnit {
        &self.cost_center
    }

    fn department(&self) -> &OrgUnit {
        &self.department
    }

    fn label(&self) -> String {
        let name = self.display_name();
        match (name.is_empty(), self.title.is_empty()) {
            (_, true) => name,
            (true, false) => self.title.clone(),
            (false, false) => format!("{name} ({})", self.title),
        }
    }
}
