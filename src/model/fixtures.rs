// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![cfg(test)]

//! Hand-built nodes for unit tests that should not depend on the normalizer.

use super::ids::NodeId;
use super::person::{HierarchyLevel, NodeKind, PersonNode};
use super::unit::OrgUnit;

fn nid(value: &str) -> NodeId {
    value.parse().expect("node id")
}

pub(crate) fn person(id: &str, parent: Option<&str>, position_code: &str) -> PersonNode {
    let id = nid(id);
    let kind = match id.family() {
        super::ids::NodeFamily::Employee => NodeKind::Person,
        _ => NodeKind::Vacant,
    };
    PersonNode {
        employee_code: if kind == NodeKind::Person {
            id.code().to_owned()
        } else {
            String::new()
        },
        id,
        parent_id: parent.map(nid),
        kind,
        name: String::new(),
        surname: String::new(),
        title: format!("Puesto {position_code}"),
        business_unit: OrgUnit::default(),
        cost_center: OrgUnit::default(),
        department: OrgUnit::default(),
        email: String::new(),
        photo: String::new(),
        hire_date: String::new(),
        manual_path: String::new(),
        login: String::new(),
        level: HierarchyLevel::Unknown,
        position_code: position_code.to_owned(),
        reports_to_code: String::new(),
    }
}

/// A person node placed in a business unit / cost center / department (by display name).
pub(crate) fn person_in(
    id: &str,
    parent: Option<&str>,
    units: (&str, &str, &str),
) -> PersonNode {
    let mut node = person(id, parent, id);
    node.business_unit = OrgUnit::new("", units.0);
    node.cost_center = OrgUnit::new("", units.1);
    node.department = OrgUnit::new("", units.2);
    node
}

/// A small two-unit org:
///
/// ```text
/// E-1 (Corp/Dir/Gerencia)
/// ├── E-2 (Retail/Tiendas/Ventas)
/// │   ├── E-4 (Retail/Tiendas/Ventas)
/// │   └── P-5 (Retail/Bodega/Logística)
/// └── E-3 (Corp/Finanzas/Contabilidad)
///     └── E-6 (Corp/Finanzas/Tesorería)
/// ```
pub(crate) fn small_org() -> Vec<PersonNode> {
    vec![
        person_in("E-1", None, ("Corp", "Dir", "Gerencia")),
        person_in("E-2", Some("E-1"), ("Retail", "Tiendas", "Ventas")),
        person_in("E-3", Some("E-1"), ("Corp", "Finanzas", "Contabilidad")),
        person_in("E-4", Some("E-2"), ("Retail", "Tiendas", "Ventas")),
        person_in("P-5", Some("E-2"), ("Retail", "Bodega", "Logística")),
        person_in("E-6", Some("E-3"), ("Corp", "Finanzas", "Tesorería")),
    ]
}
