// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! By-person view: one node per occupant or titled vacancy.

use std::collections::{HashMap, HashSet};

use crate::config::HierarchyConfig;
use crate::format::{is_alphabetic_login, normalize_login, PersonRecord};
use crate::model::{HierarchyLevel, NodeFamily, NodeId, NodeKind, OrgUnit, PersonNode};

use super::{finalize, Hierarchy};

/// Builds the by-person hierarchy.
///
/// Parent resolution, first match wins:
/// 1. explicit manager employee code → `E-<manager>`;
/// 2. reported-to position held by a real occupant → that occupant's `E-` id;
/// 3. reported-to position with no occupant → the vacancy id `P-<position>`.
///
/// The directory grouping and anything reporting straight to it are excluded, except the
/// top position, which is always a root.
pub fn build_people(
    mut records: Vec<PersonRecord>,
    config: &HierarchyConfig,
) -> Hierarchy<PersonNode> {
    records.retain(|record| {
        let keep = !record.position_code.is_empty();
        if !keep {
            log::debug!("skipping person record without position code");
        }
        keep
    });

    let occupants = occupant_index(&records);
    let records = dedupe_by_employee(records);

    let mut nodes: Vec<PersonNode> = Vec::with_capacity(records.len());
    for record in records {
        if let Some(node) = person_node(record, &occupants, config) {
            nodes.push(node);
        }
    }

    if config.synthesize_missing_positions {
        synthesize_virtual_positions(&mut nodes);
    }

    finalize(nodes, config)
}

/// Collapses records sharing an employee code.
///
/// The first occurrence keeps its slot; a later record replaces it only when it carries an
/// alphabetic login and the kept one does not.
fn dedupe_by_employee(records: Vec<PersonRecord>) -> Vec<PersonRecord> {
    let mut out: Vec<PersonRecord> = Vec::with_capacity(records.len());
    let mut slots: HashMap<String, usize> = HashMap::new();

    for record in records {
        if record.is_vacant() {
            out.push(record);
            continue;
        }

        match slots.get(&record.employee_code) {
            Some(&slot) => {
                let kept = &out[slot];
                if is_alphabetic_login(&record.login) && !is_alphabetic_login(&kept.login) {
                    log::debug!(
                        "employee {}: preferring login {:?} over {:?}",
                        record.employee_code,
                        record.login,
                        kept.login
                    );
                    out[slot] = record;
                } else {
                    log::debug!("employee {}: ignoring duplicate record", record.employee_code);
                }
            }
            None => {
                slots.insert(record.employee_code.clone(), out.len());
                out.push(record);
            }
        }
    }

    out
}

/// Position code → employee code of its current real occupant (later records win).
///
/// Built over every record before deduplication, so an employee holding several positions
/// stays the occupant of each.
fn occupant_index(records: &[PersonRecord]) -> HashMap<String, String> {
    records
        .iter()
        .filter(|record| !record.is_vacant() && !record.position_code.is_empty())
        .map(|record| (record.position_code.clone(), record.employee_code.clone()))
        .collect()
}

fn resolve_parent(
    record: &PersonRecord,
    occupants: &HashMap<String, String>,
) -> Option<NodeId> {
    if !record.manager_code.is_empty() {
        return NodeId::employee(&record.manager_code).ok();
    }
    if record.reports_to_code.is_empty() {
        return None;
    }
    match occupants.get(&record.reports_to_code) {
        Some(employee_code) => NodeId::employee(employee_code).ok(),
        None => NodeId::vacancy(&record.reports_to_code).ok(),
    }
}

fn person_node(
    mut record: PersonRecord,
    occupants: &HashMap<String, String>,
    config: &HierarchyConfig,
) -> Option<PersonNode> {
    let directory = config.directory_position_code.as_str();
    let is_top = record.position_code == config.top_position_code;

    if record.position_code == directory {
        return None;
    }
    if record.reports_to_code == directory && !is_top {
        return None;
    }

    let mut parent_id = if is_top {
        record.reports_to_code.clear();
        None
    } else {
        resolve_parent(&record, occupants)
    };

    let vacant = record.is_vacant();
    if vacant && record.title.is_empty() {
        return None;
    }

    let id = if vacant {
        NodeId::vacancy(&record.position_code)
    } else {
        NodeId::employee(&record.employee_code)
    }
    .ok()?;

    if parent_id.as_ref() == Some(&id) {
        parent_id = None;
    }

    let business_unit = OrgUnit::new(record.business_unit_code, record.business_unit_name);
    let cost_center = OrgUnit::new(record.cost_center_code, record.cost_center_name);
    let department = OrgUnit::new(record.department_code, record.department_name);

    let node = if vacant {
        PersonNode {
            id,
            parent_id,
            kind: NodeKind::Vacant,
            employee_code: String::new(),
            name: String::new(),
            surname: String::new(),
            title: record.title,
            business_unit,
            cost_center,
            department,
            email: String::new(),
            photo: String::new(),
            hire_date: String::new(),
            manual_path: String::new(),
            login: String::new(),
            level: HierarchyLevel::parse(&record.level),
            position_code: record.position_code,
            reports_to_code: record.reports_to_code,
        }
    } else {
        PersonNode {
            id,
            parent_id,
            kind: NodeKind::Person,
            login: normalize_login(&record.login),
            employee_code: record.employee_code,
            name: record.name,
            surname: record.surname,
            title: record.title,
            business_unit,
            cost_center,
            department,
            email: record.email,
            photo: record.photo,
            hire_date: record.hire_date,
            manual_path: record.manual_path,
            level: HierarchyLevel::parse(&record.level),
            position_code: record.position_code,
            reports_to_code: record.reports_to_code,
        }
    };
    Some(node)
}

/// Adds a parentless `virtual` node for every `P-` parent with no node of its own.
fn synthesize_virtual_positions(nodes: &mut Vec<PersonNode>) {
    let known: HashSet<NodeId> = nodes.iter().map(|node| node.id.clone()).collect();
    let mut added: HashSet<NodeId> = HashSet::new();
    let mut virtuals: Vec<PersonNode> = Vec::new();

    for node in nodes.iter() {
        let Some(parent_id) = node.parent_id.as_ref() else {
            continue;
        };
        if parent_id.family() != NodeFamily::Vacancy
            || known.contains(parent_id)
            || !added.insert(parent_id.clone())
        {
            continue;
        }

        log::debug!("synthesizing virtual node {parent_id}");
        virtuals.push(PersonNode {
            id: parent_id.clone(),
            parent_id: None,
            kind: NodeKind::Virtual,
            employee_code: String::new(),
            name: String::new(),
            surname: String::new(),
            title: parent_id.code().to_owned(),
            business_unit: OrgUnit::default(),
            cost_center: OrgUnit::default(),
            department: OrgUnit::default(),
            email: String::new(),
            photo: String::new(),
            hire_date: String::new(),
            manual_path: String::new(),
            login: String::new(),
            level: HierarchyLevel::Unknown,
            position_code: parent_id.code().to_owned(),
            reports_to_code: String::new(),
        });
    }

    nodes.extend(virtuals);
}
