// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use crate::model::{ChartNode, HierarchyNode, NodeId};

/// Parent id → positions (in `nodes`) of its direct children, in input order.
pub fn children_index<T: HierarchyNode>(nodes: &[T]) -> HashMap<&NodeId, Vec<usize>> {
    let mut children: HashMap<&NodeId, Vec<usize>> = HashMap::new();
    for (pos, node) in nodes.iter().enumerate() {
        if let Some(parent_id) = node.parent_id() {
            children.entry(parent_id).or_default().push(pos);
        }
    }
    children
}

fn id_index<T: HierarchyNode>(nodes: &[T]) -> HashMap<&NodeId, usize> {
    let mut index: HashMap<&NodeId, usize> = HashMap::with_capacity(nodes.len());
    for (pos, node) in nodes.iter().enumerate() {
        index.entry(node.id()).or_insert(pos);
    }
    index
}

/// The ancestor-closed subset of `nodes`: every node matching `predicate` plus all of its
/// ancestors reachable through `parent_id`. Output keeps input order.
///
/// Each upward walk stops at the first node already included or at a parent missing from
/// `nodes`, so parent cycles terminate.
pub fn filter_hierarchy<T, F>(nodes: &[T], predicate: F) -> Vec<T>
where
    T: HierarchyNode + Clone,
    F: Fn(&T) -> bool,
{
    let index = id_index(nodes);
    let mut included = vec![false; nodes.len()];

    for (start, node) in nodes.iter().enumerate() {
        if !predicate(node) {
            continue;
        }
        let mut cursor = Some(start);
        while let Some(pos) = cursor {
            if included[pos] {
                break;
            }
            included[pos] = true;
            cursor = nodes[pos]
                .parent_id()
                .and_then(|parent_id| index.get(parent_id).copied());
        }
    }

    nodes
        .iter()
        .zip(included)
        .filter_map(|(node, keep)| keep.then(|| node.clone()))
        .collect()
}

/// Descendant formulation of [`filter_hierarchy`]: a node is kept iff it matches or one of
/// its descendants does.
///
/// Traversal starts from every node whose parent is absent or missing from `nodes`; members of
/// a parent cycle are never reached from such a node and are left out. On acyclic input the
/// result equals [`filter_hierarchy`].
pub fn filter_from_roots<T, F>(nodes: &[T], predicate: F) -> Vec<T>
where
    T: HierarchyNode + Clone,
    F: Fn(&T) -> bool,
{
    let index = id_index(nodes);
    let children = children_index(nodes);
    let mut included = vec![false; nodes.len()];
    let mut visited = vec![false; nodes.len()];

    let roots = nodes.iter().enumerate().filter(|(_, node)| {
        node.parent_id()
            .map_or(true, |parent_id| !index.contains_key(parent_id))
    });

    for (root, _) in roots {
        // (node, children already pushed)
        let mut stack: Vec<(usize, bool)> = vec![(root, false)];
        while let Some((pos, expanded)) = stack.pop() {
            if expanded {
                let child_hit = children
                    .get(nodes[pos].id())
                    .into_iter()
                    .flatten()
                    .any(|&child| included[child]);
                included[pos] = child_hit || predicate(&nodes[pos]);
                continue;
            }
            if visited[pos] {
                continue;
            }
            visited[pos] = true;
            stack.push((pos, true));
            for &child in children.get(nodes[pos].id()).into_iter().flatten() {
                if !visited[child] {
                    stack.push((child, false));
                }
            }
        }
    }

    nodes
        .iter()
        .zip(included)
        .filter_map(|(node, keep)| keep.then(|| node.clone()))
        .collect()
}

/// Business-unit / cost-center / department selection, matched on display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitFilter {
    pub business_unit: Option<String>,
    pub cost_center: Option<String>,
    pub department: Option<String>,
}

impl UnitFilter {
    pub fn is_active(&self) -> bool {
        self.business_unit.is_some() || self.cost_center.is_some() || self.department.is_some()
    }

    pub fn matches<T: ChartNode>(&self, node: &T) -> bool {
        fn accepts(selected: Option<&String>, actual: &str) -> bool {
            selected.map_or(true, |selected| selected == actual)
        }

        accepts(self.business_unit.as_ref(), node.business_unit().name())
            && accepts(self.cost_center.as_ref(), node.cost_center().name())
            && accepts(self.department.as_ref(), node.department().name())
    }
}

/// [`filter_hierarchy`] with `filter` as the predicate; an inactive filter returns the input
/// unchanged.
pub fn apply_unit_filter<T: ChartNode + Clone>(nodes: &[T], filter: &UnitFilter) -> Vec<T> {
    if !filter.is_active() {
        return nodes.to_vec();
    }
    filter_hierarchy(nodes, |node| filter.matches(node))
}
