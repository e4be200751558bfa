// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::collections::HashSet;

use lexical_sort::natural_lexical_cmp;
use serde::Serialize;

use crate::model::{ChartNode, OrgUnit};

/// One dropdown entry. Both fields carry the unit's display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(name: impl Into<String>) -> Self {
        let value = name.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Locale-aware ordering (case and accent folded), with a byte-wise tie break so the order
/// is total.
fn display_cmp(a: &str, b: &str) -> Ordering {
    natural_lexical_cmp(a, b).then_with(|| a.cmp(b))
}

fn distinct_options<'a>(names: impl Iterator<Item = &'a str>) -> Vec<FilterOption> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut options: Vec<FilterOption> = names
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(FilterOption::new)
        .collect();
    options.sort_by(|a, b| display_cmp(&a.label, &b.label));
    options
}

fn unit_options<'a, T, F>(nodes: &'a [T], unit: F) -> Vec<FilterOption>
where
    T: ChartNode,
    F: Fn(&'a T) -> &'a OrgUnit,
{
    distinct_options(nodes.iter().map(|node| unit(node).name()))
}

pub fn business_unit_options<T: ChartNode>(nodes: &[T]) -> Vec<FilterOption> {
    unit_options(nodes, T::business_unit)
}

/// Cost centers appearing under `business_unit`; empty until a business unit is selected.
pub fn cost_center_options<T: ChartNode>(
    nodes: &[T],
    business_unit: Option<&str>,
) -> Vec<FilterOption> {
    let Some(business_unit) = business_unit else {
        return Vec::new();
    };
    distinct_options(
        nodes
            .iter()
            .filter(|node| node.business_unit().name() == business_unit)
            .map(|node| node.cost_center().name()),
    )
}

/// Departments across the whole node set.
///
/// Does not narrow on the selected cost center. TODO: confirm with HR whether departments
/// should cascade from cost center like cost centers cascade from business unit.
pub fn department_options<T: ChartNode>(nodes: &[T]) -> Vec<FilterOption> {
    unit_options(nodes, T::department)
}

/// Stable sort by title, using the same comparison as the option lists.
pub fn sort_by_title<T: ChartNode>(nodes: &mut [T]) {
    nodes.sort_by(|a, b| display_cmp(a.title(), b.title()));
}
