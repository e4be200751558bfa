// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use crate::config::{HierarchyConfig, RootPolicy};
use crate::model::{HierarchyNode, NodeId, Relink};

use super::Hierarchy;

/// Repairs freshly built nodes into a [`Hierarchy`].
///
/// Passes, in order:
/// 1. duplicate ids keep their first occurrence;
/// 2. a node listed as its own parent becomes a root;
/// 3. parents missing from the set are cleared;
/// 4. one root is kept (the top position if present, else the first root in order) and the
///    others are detached or re-parented according to `config.root_policy`.
///
/// Longer cycles are left alone; their members are unreachable from the kept root.
pub(crate) fn finalize<T: Relink>(nodes: Vec<T>, config: &HierarchyConfig) -> Hierarchy<T> {
    let mut seen: HashSet<NodeId> = HashSet::with_capacity(nodes.len());
    let mut nodes: Vec<T> = nodes
        .into_iter()
        .filter(|node| {
            let fresh = seen.insert(node.id().clone());
            if !fresh {
                log::debug!("dropping duplicate node {}", node.id());
            }
            fresh
        })
        .collect();

    for node in &mut nodes {
        if node.parent_id() == Some(node.id()) {
            log::debug!("node {} reports to itself; forcing it to root", node.id());
            node.set_parent_id(None);
        }
    }

    for node in &mut nodes {
        let dangling = node
            .parent_id()
            .is_some_and(|parent_id| !seen.contains(parent_id));
        if dangling {
            log::debug!(
                "node {} reports to missing node {}; clearing parent",
                node.id(),
                node.parent_id().map(NodeId::as_str).unwrap_or_default()
            );
            node.set_parent_id(None);
        }
    }

    let roots: Vec<NodeId> = nodes
        .iter()
        .filter(|node| node.parent_id().is_none())
        .map(|node| node.id().clone())
        .collect();

    let kept = nodes
        .iter()
        .find(|node| {
            node.parent_id().is_none() && node.position_code() == config.top_position_code
        })
        .map(|node| node.id().clone())
        .or_else(|| roots.first().cloned());

    let Some(kept) = kept else {
        if !nodes.is_empty() {
            log::warn!("no root found among {} node(s); every node is in a cycle", nodes.len());
        }
        return Hierarchy::from_parts(nodes, None, Vec::new());
    };

    let others: Vec<NodeId> = roots.into_iter().filter(|id| *id != kept).collect();
    if !others.is_empty() {
        log::warn!(
            "{} roots detected; keeping {kept} ({:?} policy for the rest)",
            others.len() + 1,
            config.root_policy
        );
    }

    match config.root_policy {
        RootPolicy::Detach => Hierarchy::from_parts(nodes, Some(kept), others),
        RootPolicy::Reparent => {
            let others: HashSet<NodeId> = others.into_iter().collect();
            for node in &mut nodes {
                if others.contains(node.id()) {
                    node.set_parent_id(Some(kept.clone()));
                }
            }
            Hierarchy::from_parts(nodes, Some(kept), Vec::new())
        }
    }
}
