// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Hierarchy Builder.
//!
//! Builders turn canonical records into nodes, then [`finalize`] repairs the links so the
//! result is a single traversable tree: no self-parents, no dangling parents, one kept root.

mod finalize;
pub mod person;
pub mod position;

use std::collections::{HashMap, HashSet, VecDeque};

use crate::model::{HierarchyNode, NodeId};
use crate::query::children_index;

pub(crate) use finalize::finalize;
pub use person::build_people;
pub use position::build_positions;

/// A repaired node set with one designated root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy<T> {
    nodes: Vec<T>,
    index: HashMap<NodeId, usize>,
    root: Option<NodeId>,
    detached_roots: Vec<NodeId>,
}

impl<T> Default for Hierarchy<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            root: None,
            detached_roots: Vec::new(),
        }
    }
}

impl<T: HierarchyNode> Hierarchy<T> {
    pub(crate) fn from_parts(
        nodes: Vec<T>,
        root: Option<NodeId>,
        detached_roots: Vec<NodeId>,
    ) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(pos, node)| (node.id().clone(), pos))
            .collect();
        Self {
            nodes,
            index,
            root,
            detached_roots,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Every node, including detached roots and anything hanging off them.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.nodes[pos])
    }

    pub fn root_id(&self) -> Option<&NodeId> {
        self.root.as_ref()
    }

    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().and_then(|id| self.get(id.as_str()))
    }

    /// Roots that lost the single-root election; parentless and unreachable from [`Self::root`].
    pub fn detached_roots(&self) -> &[NodeId] {
        &self.detached_roots
    }

    /// Nodes reachable from the kept root, in node order.
    ///
    /// This is the set handed to the renderer: exactly one node in it has no parent.
    pub fn reachable_nodes(&self) -> Vec<&T> {
        let Some(root) = self.root.as_ref() else {
            return Vec::new();
        };

        let children = children_index(&self.nodes);
        let mut visited: HashSet<&NodeId> = HashSet::new();
        let mut queue: VecDeque<&NodeId> = VecDeque::new();
        visited.insert(root);
        queue.push_back(root);

        while let Some(id) = queue.pop_front() {
            for &child in children.get(id).into_iter().flatten() {
                let child_id = self.nodes[child].id();
                if visited.insert(child_id) {
                    queue.push_back(child_id);
                }
            }
        }

        self.nodes
            .iter()
            .filter(|node| visited.contains(node.id()))
            .collect()
    }

    pub fn into_nodes(self) -> Vec<T> {
        self.nodes
    }
}

impl<T: HierarchyNode + Clone> Hierarchy<T> {
    pub fn reachable_cloned(&self) -> Vec<T> {
        self.reachable_nodes().into_iter().cloned().collect()
    }
}
