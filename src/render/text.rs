// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, HashSet};

use crate::model::{ChartNode, NodeId};
use crate::query::children_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Labels longer than this many characters are cut with `…`.
    pub max_label_width: usize,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            max_label_width: 72,
        }
    }
}

fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text_len(text) <= max_len {
        return text.to_owned();
    }
    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Indented tree of `nodes`, one label per line.
///
/// Siblings keep their order in `nodes`. A node whose parent is not in `nodes` starts a new
/// tree at the left margin.
pub fn render_outline<T: ChartNode>(nodes: &[T], options: &OutlineOptions) -> String {
    let present: HashSet<&NodeId> = nodes.iter().map(|node| node.id()).collect();
    let children = children_index(nodes);
    let mut visited = vec![false; nodes.len()];
    let mut lines: Vec<String> = Vec::with_capacity(nodes.len());

    let tops = nodes.iter().enumerate().filter(|(_, node)| {
        node.parent_id()
            .map_or(true, |parent_id| !present.contains(parent_id))
    });

    for (top, _) in tops {
        // (node, prefix for its children, connector drawn before it)
        let mut stack: Vec<(usize, String, &str)> = vec![(top, String::new(), "")];
        while let Some((pos, prefix, connector)) = stack.pop() {
            if visited[pos] {
                continue;
            }
            visited[pos] = true;

            let label = truncate_with_ellipsis(&nodes[pos].label(), options.max_label_width);
            lines.push(format!("{prefix}{connector}{label}"));

            let child_prefix = match connector {
                "" => prefix.clone(),
                "└── " => format!("{prefix}    "),
                _ => format!("{prefix}│   "),
            };
            push_children(&mut stack, &children, nodes[pos].id(), &child_prefix);
        }
    }

    lines.join("\n")
}

fn push_children<'a>(
    stack: &mut Vec<(usize, String, &'a str)>,
    children: &HashMap<&NodeId, Vec<usize>>,
    parent: &NodeId,
    prefix: &str,
) {
    let Some(kids) = children.get(parent) else {
        return;
    };
    for (rank, &child) in kids.iter().enumerate().rev() {
        let connector = if rank + 1 == kids.len() { "└── " } else { "├── " };
        stack.push((child, prefix.to_owned(), connector));
    }
}
