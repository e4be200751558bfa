// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::ids::NodeId;
use super::node::{ChartNode, HierarchyNode, Relink};
use super::unit::OrgUnit;

/// Lifecycle status reported for a position (`estadoCargo`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    Active,
    Inactive,
    #[default]
    Unspecified,
}

impl PositionStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" | "ACTIVO" | "ACTIVE" | "1" => Self::Active,
            "I" | "INACTIVO" | "INACTIVE" | "0" => Self::Inactive,
            _ => Self::Unspecified,
        }
    }
}

/// A person occupying a position in the by-position view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub(crate) code: String,
    pub(crate) name: String,
    pub(crate) surname: String,
    pub(crate) email: String,
    pub(crate) photo: String,
    pub(crate) job_title: String,
    pub(crate) business_unit: OrgUnit,
    pub(crate) cost_center: OrgUnit,
    pub(crate) department: OrgUnit,
    pub(crate) hire_date: String,
    pub(crate) manual_path: String,
    pub(crate) login: String,
    pub(crate) position_code: String,
}

impl Employee {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn full_name(&self) -> String {
        match (self.name.is_empty(), self.surname.is_empty()) {
            (false, false) => format!("{} {}", self.name, self.surname),
            (false, true) => self.name.clone(),
            (true, false) => self.surname.clone(),
            (true, true) => String::new(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn business_unit(&self) -> &OrgUnit {
        &self.business_unit
    }

    pub fn cost_center(&self) -> &OrgUnit {
        &self.cost_center
    }

    pub fn department(&self) -> &OrgUnit {
        &self.department
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

    pub fn position_code(&self) -> &str {
        &self.position_code
    }
}

/// One organizational position (role slot), filled by zero or more occupants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionNode {
    pub(crate) id: NodeId,
    pub(crate) parent_id: Option<NodeId>,
    pub(crate) position_code: String,
    pub(crate) reports_to_code: String,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) status: PositionStatus,
    pub(crate) business_unit: OrgUnit,
    pub(crate) cost_center: OrgUnit,
    pub(crate) department: OrgUnit,
    pub(crate) occupants: Vec<Employee>,
}

impl PositionNode {
    pub fn reports_to_code(&self) -> &str {
        &self.reports_to_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> PositionStatus {
        self.status
    }

    /// Occupants in source order, unique by employee code.
    pub fn occupants(&self) -> &[Employee] {
        &self.occupants
    }

    pub fn is_vacant(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn occupant(&self, employee_code: &str) -> Option<&Employee> {
        self.occupants.iter().find(|emp| emp.code == employee_code)
    }
}

impl HierarchyNode for PositionNode {
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

impl Relink for PositionNode {
    fn set_parent_id(&mut self, parent_id: Option<NodeId>) {
        self.parent_id = parent_id;
    }
}

impl ChartNode for PositionNode {
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
        match self.occupants.as_slice() {
            [] => format!("{} (vacante)", self.title),
            [only] => format!("{}: {}", self.title, only.full_name()),
            many => format!("{} ({} ocupantes)", self.title, many.len()),
        }
    }
}

impl Serialize for PositionNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PositionNode", 13)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("parentId", &self.parent_id)?;
        state.serialize_field("tipo", "cargo")?;
        state.serialize_field("positionCode", &self.position_code)?;
        state.serialize_field("reportsToCode", &self.reports_to_code)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("status", &self.status)?;
        state.serialize_field("businessUnit", &self.business_unit)?;
        state.serialize_field("costCenter", &self.cost_center)?;
        state.serialize_field("department", &self.department)?;
        state.serialize_field("isVacant", &self.is_vacant())?;
        state.serialize_field("occupants", &self.occupants)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{Employee, PositionNode, PositionStatus};
    use crate::model::{ChartNode, NodeId, OrgUnit};

    fn node(occupants: Vec<Employee>) -> PositionNode {
        PositionNode {
            id: NodeId::position("00002").expect("id"),
            parent_id: Some(NodeId::position("00001").expect("parent")),
            position_code: "00002".to_owned(),
            reports_to_code: "00001".to_owned(),
            title: "Jefe de Sistemas".to_owned(),
            description: String::new(),
            status: PositionStatus::Active,
            business_unit: OrgUnit::new("BU1", "Corporativo"),
            cost_center: OrgUnit::default(),
            department: OrgUnit::default(),
            occupants,
        }
    }

    #[test]
    fn status_parse_accepts_codes_and_words() {
        assert_eq!(PositionStatus::parse("A"), PositionStatus::Active);
        assert_eq!(PositionStatus::parse(" inactivo "), PositionStatus::Inactive);
        assert_eq!(PositionStatus::parse(""), PositionStatus::Unspecified);
    }

    #[test]
    fn vacancy_follows_occupants() {
        assert!(node(Vec::new()).is_vacant());

        let emp = Employee {
            code: "100".to_owned(),
            name: "Ana".to_owned(),
            surname: "Mora".to_owned(),
            ..Employee::default()
        };
        let filled = node(vec![emp]);
        assert!(!filled.is_vacant());
        assert_eq!(filled.label(), "Jefe de Sistemas: Ana Mora");
        assert_eq!(filled.occupant("100").map(Employee::surname), Some("Mora"));
    }

    #[test]
    fn serializes_renderer_fields() {
        let value = serde_json::to_value(node(Vec::new())).expect("serialize");
        assert_eq!(value["id"], "C-00002");
        assert_eq!(value["parentId"], "C-00001");
        assert_eq!(value["isVacant"], true);
        assert_eq!(value["status"], "active");
        assert_eq!(value["businessUnit"]["name"], "Corporativo");
    }
}
