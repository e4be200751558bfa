// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;
use super::unit::OrgUnit;

/// Anything that lives in a rooted org-chart hierarchy.
pub trait HierarchyNode {
    fn id(&self) -> &NodeId;

    /// `None` only for roots.
    fn parent_id(&self) -> Option<&NodeId>;

    /// The source position code behind this node (empty if the node has none).
    fn position_code(&self) -> &str;
}

/// A hierarchy node carrying the display attributes the view layer filters and sorts on.
pub trait ChartNode: HierarchyNode {
    fn title(&self) -> &str;

    fn business_unit(&self) -> &OrgUnit;

    fn cost_center(&self) -> &OrgUnit;

    fn department(&self) -> &OrgUnit;

    /// One-line label used by the text outline.
    fn label(&self) -> String;
}

/// Parent rewiring used while finalizing a freshly built hierarchy.
///
/// Kept crate-private: once a hierarchy has been handed out its links are read-only.
pub(crate) trait Relink: HierarchyNode {
    fn set_parent_id(&mut self, parent_id: Option<NodeId>);
}
