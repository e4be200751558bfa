// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! By-position view: one node per distinct position code.

use std::collections::HashMap;

use crate::config::HierarchyConfig;
use crate::format::{normalize_login, EmployeeRecord, PositionRecord};
use crate::model::{Employee, NodeId, OrgUnit, PositionNode, PositionStatus};

use super::{finalize, Hierarchy};

struct PositionGroup {
    base: PositionRecord,
    occupants: Vec<Employee>,
}

impl PositionGroup {
    /// Attaches occupants that belong to this position and are not already present.
    fn absorb(&mut self, employees: Vec<EmployeeRecord>) {
        for record in employees {
            if record.employee_code.is_empty()
                || record.position_code != self.base.position_code
                || self
                    .occupants
                    .iter()
                    .any(|emp| emp.code == record.employee_code)
            {
                continue;
            }
            self.occupants.push(employee_from_record(record));
        }
    }
}

fn employee_from_record(record: EmployeeRecord) -> Employee {
    Employee {
        login: normalize_login(&record.login),
        code: record.employee_code,
        name: record.name,
        surname: record.surname,
        email: record.email,
        photo: record.photo,
        job_title: record.job_title,
        business_unit: OrgUnit::new(record.business_unit_code, record.business_unit_name),
        cost_center: OrgUnit::new(record.cost_center_code, record.cost_center_name),
        department: OrgUnit::new(record.department_code, record.department_name),
        hire_date: record.hire_date,
        manual_path: record.manual_path,
        position_code: record.position_code,
    }
}

/// Builds the by-position hierarchy.
///
/// Records sharing a position code are merged: the first one supplies the position's own
/// fields, and every record contributes occupants (deduplicated by employee code). A
/// position with neither a title nor occupants is dropped. Parent links come straight from
/// the reported-to code.
pub fn build_positions(
    records: Vec<PositionRecord>,
    config: &HierarchyConfig,
) -> Hierarchy<PositionNode> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, PositionGroup> = HashMap::new();

    for mut record in records {
        let employees = std::mem::take(&mut record.employees);
        let group = groups
            .entry(record.position_code.clone())
            .or_insert_with(|| {
                order.push(record.position_code.clone());
                PositionGroup {
                    base: record,
                    occupants: Vec::new(),
                }
            });
        group.absorb(employees);
    }

    let mut nodes = Vec::with_capacity(order.len());
    for code in order {
        let Some(group) = groups.remove(&code) else {
            continue;
        };
        match position_node(group) {
            Some(node) => nodes.push(node),
            None => log::debug!("dropping position {code}: no title and no occupants"),
        }
    }

    finalize(nodes, config)
}

fn position_node(group: PositionGroup) -> Option<PositionNode> {
    let PositionGroup { base, occupants } = group;
    let first = occupants.first();

    let title = if base.title.is_empty() {
        first.map(|emp| emp.job_title.clone()).unwrap_or_default()
    } else {
        base.title
    };
    if title.is_empty() && occupants.is_empty() {
        return None;
    }

    let fallback = first.cloned().unwrap_or_default();
    let business_unit = OrgUnit::new(base.business_unit_code, base.business_unit_name)
        .or_fill_from(&fallback.business_unit);
    let cost_center = OrgUnit::new(base.cost_center_code, base.cost_center_name)
        .or_fill_from(&fallback.cost_center);
    let department = OrgUnit::new(base.department_code, base.department_name)
        .or_fill_from(&fallback.department);

    let id = NodeId::position(&base.position_code).ok()?;
    let parent_id = if base.reports_to_code.is_empty() {
        None
    } else {
        NodeId::position(&base.reports_to_code).ok()
    };

    Some(PositionNode {
        id,
        parent_id,
        position_code: base.position_code,
        reports_to_code: base.reports_to_code,
        title,
        description: base.description,
        status: PositionStatus::parse(&base.status),
        business_unit,
        cost_center,
        department,
        occupants,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::build_positions;
    use crate::config::HierarchyConfig;
    use crate::format::{normalize_positions, RawDocument, RecordKey};
    use crate::model::{ChartNode, HierarchyNode, PositionNode, PositionStatus};
    use crate::build::Hierarchy;

    fn build(value: serde_json::Value) -> Hierarchy<PositionNode> {
        let doc = RawDocument::detect(value, RecordKey::Cargo);
        build_positions(normalize_positions(&doc), &HierarchyConfig::default())
    }

    #[test]
    fn three_level_chain_marks_empty_position_vacant() {
        let built = build(json!({"Organigrama": {"Cargo": [
            {"codigoPosicion": "00001", "puesto": "Presidente"},
            {"codigoPosicion": "00002", "codigoPosicionReporta": "00001", "puesto": "Gerente",
             "Empleado": {"codigoEmpleado": "10", "nombre": "Ana"}},
            {"codigoPosicion": "00003", "codigoPosicionReporta": "00002", "puesto": "Asistente"}
        ]}}));

        assert_eq!(built.len(), 3);
        let third = built.get("C-00003").expect("00003");
        assert!(third.is_vacant());
        assert_eq!(third.parent_id().map(|id| id.as_str()), Some("C-00002"));
        assert!(!built.get("C-00002").expect("00002").is_vacant());
        assert_eq!(built.root_id().map(|id| id.as_str()), Some("C-00001"));
    }

    #[test]
    fn repeated_position_rows_merge_and_dedupe_occupants() {
        let built = build(json!([
            {"codigoPosicion": "00010", "puesto": "Cajero", "estadoCargo": "A",
             "Empleado": [{"codigoEmpleado": "1"}, {"codigoEmpleado": "2"}]},
            {"codigoPosicion": "00010", "puesto": "Ignorado",
             "Empleado": [{"codigoEmpleado": "2"}, {"codigoEmpleado": "3"}]}
        ]));

        assert_eq!(built.len(), 1);
        let node = built.get("C-00010").expect("position");
        assert_eq!(node.title(), "Cajero");
        assert_eq!(node.status(), PositionStatus::Active);
        let codes: Vec<&str> = node.occupants().iter().map(|emp| emp.code()).collect();
        assert_eq!(codes, vec!["1", "2", "3"]);
    }

    #[test]
    fn occupants_for_other_positions_are_not_attached() {
        let built = build(json!([
            {"codigoPosicion": "00010", "puesto": "Cajero",
             "Empleado": [{"codigoEmpleado": "1", "codigoPosicion": "00099"}, {"CODIGO": ""}]}
        ]));
        let node = built.get("C-00010").expect("position");
        assert!(node.is_vacant());
        assert!(node.occupants().is_empty());
    }

    #[test]
    fn untitled_positions_without_occupants_are_dropped() {
        let built = build(json!([
            {"codigoPosicion": "00001", "puesto": "Presidente"},
            {"codigoPosicion": "00020", "codigoPosicionReporta": "00001"},
            {"codigoPosicion": "00021", "codigoPosicionReporta": "00001",
             "Empleado": {"codigoEmpleado": "5", "puestoEmpleado": "Chofer"}}
        ]));
        assert!(built.get("C-00020").is_none());
        let kept = built.get("C-00021").expect("occupied position kept");
        assert_eq!(kept.title(), "Chofer");
    }

    #[test]
    fn units_fall_back_to_first_occupant() {
        let built = build(json!([
            {"codigoPosicion": "00030", "puesto": "Analista", "nombreDepartamento": "Sistemas",
             "Empleado": {"codigoEmpleado": "8", "codDepAx": "BU7", "nombreLineaNegocio": "Retail",
                          "nombreDepartamento": "Otro", "nombreCentroCosto": "CC Quito",
                          "userid": "INTERNO\\MRuiz"}}
        ]));
        let node = built.get("C-00030").expect("position");
        assert_eq!(node.department().name(), "Sistemas");
        assert_eq!(node.business_unit().code(), "BU7");
        assert_eq!(node.business_unit().name(), "Retail");
        assert_eq!(node.cost_center().name(), "CC Quito");
        assert_eq!(node.occupants()[0].login(), "mruiz");
    }

    #[test]
    fn unexpected_document_builds_nothing() {
        let built = build(json!({"Persona": []}));
        assert!(built.is_empty());
        assert!(built.root().is_none());
    }
}
