// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::access::Viewer;
use crate::build::Hierarchy;
use crate::model::ChartNode;
use crate::query::{
    apply_unit_filter, business_unit_options, cost_center_options, department_options,
    sort_by_title, FilterOption,
};

use super::FilterSelection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// A refresh is in flight.
    Loading,
    /// The viewer's selection is fixed to their own units.
    Locked,
    UnknownOption { field: &'static str, value: String },
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => f.write_str("chart is still loading"),
            Self::Locked => f.write_str("filters are locked for this viewer"),
            Self::UnknownOption { field, value } => {
                write!(f, "{value:?} is not an available {field}")
            }
        }
    }
}

impl std::error::Error for ControllerError {}

/// Explicit state for one chart page.
///
/// Each [`Self::load`] replaces the node set in one step and resets the selection, so filter
/// calls never see a mix of old and new data. Interaction is gated on [`Self::is_loading`].
#[derive(Debug, Clone)]
pub struct ViewController<T> {
    nodes: Vec<T>,
    selection: FilterSelection,
    business_units: Vec<FilterOption>,
    cost_centers: Vec<FilterOption>,
    departments: Vec<FilterOption>,
    viewer: Option<Viewer>,
    loading: bool,
}

impl<T> Default for ViewController<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            selection: FilterSelection::default(),
            business_units: Vec::new(),
            cost_centers: Vec::new(),
            departments: Vec::new(),
            viewer: None,
            loading: false,
        }
    }
}

impl<T: ChartNode + Clone> ViewController<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Replaces the node set with the hierarchy's reachable nodes.
    pub fn load(&mut self, hierarchy: &Hierarchy<T>) {
        self.nodes = hierarchy.reachable_cloned();
        self.selection = FilterSelection::default();
        self.business_units = business_unit_options(&self.nodes);
        self.departments = department_options(&self.nodes);
        self.cost_centers = Vec::new();
        self.apply_lock();
        self.loading = false;
    }

    /// Restricted viewers get their own units pre-selected and locked.
    pub fn apply_viewer(&mut self, viewer: Viewer) {
        self.viewer = Some(viewer);
        self.apply_lock();
    }

    fn apply_lock(&mut self) {
        let Some(viewer) = self.viewer.as_ref().filter(|viewer| !viewer.can_view_all()) else {
            return;
        };
        self.selection = viewer.units().clone();
        self.cost_centers =
            cost_center_options(&self.nodes, self.selection.business_unit.as_deref());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_locked(&self) -> bool {
        self.viewer.as_ref().is_some_and(|viewer| !viewer.can_view_all())
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }

    fn ensure_interactive(&self) -> Result<(), ControllerError> {
        if self.loading {
            Err(ControllerError::Loading)
        } else if self.is_locked() {
            Err(ControllerError::Locked)
        } else {
            Ok(())
        }
    }

    /// Selecting (or clearing) a business unit clears the downstream selections and narrows
    /// the cost-center options.
    pub fn select_business_unit(&mut self, value: Option<&str>) -> Result<(), ControllerError> {
        self.ensure_interactive()?;
        let value = checked(value, &self.business_units, "business unit")?;
        self.cost_centers = cost_center_options(&self.nodes, value.as_deref());
        self.selection = FilterSelection {
            business_unit: value,
            cost_center: None,
            department: None,
        };
        Ok(())
    }

    pub fn select_cost_center(&mut self, value: Option<&str>) -> Result<(), ControllerError> {
        self.ensure_interactive()?;
        self.selection.cost_center = checked(value, &self.cost_centers, "cost center")?;
        Ok(())
    }

    pub fn select_department(&mut self, value: Option<&str>) -> Result<(), ControllerError> {
        self.ensure_interactive()?;
        self.selection.department = checked(value, &self.departments, "department")?;
        Ok(())
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn business_unit_options(&self) -> &[FilterOption] {
        &self.business_units
    }

    pub fn cost_center_options(&self) -> &[FilterOption] {
        &self.cost_centers
    }

    pub fn department_options(&self) -> &[FilterOption] {
        &self.departments
    }

    /// Every node reachable from the kept root, unfiltered.
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// The ancestor-closed subset for the current selection, sorted by title.
    pub fn visible_nodes(&self) -> Vec<T> {
        let mut visible = apply_unit_filter(&self.nodes, &self.selection);
        sort_by_title(&mut visible);
        visible
    }
}

fn checked(
    value: Option<&str>,
    options: &[FilterOption],
    field: &'static str,
) -> Result<Option<String>, ControllerError> {
    match value {
        None => Ok(None),
        Some(value) if options.iter().any(|option| option.value == value) => {
            Ok(Some(value.to_owned()))
        }
        Some(value) => Err(ControllerError::UnknownOption {
            field,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::{ControllerError, ViewController};
    use crate::access::{AccessPolicy, Viewer};
    use crate::build::Hierarchy;
    use crate::config::{HierarchyConfig, OrgChartConfig};
    use crate::model::fixtures::{person_in, small_org};
    use crate::model::{HierarchyNode, PersonNode};

    fn hierarchy(nodes: Vec<PersonNode>) -> Hierarchy<PersonNode> {
        crate::build::finalize(nodes, &HierarchyConfig::default())
    }

    fn ids(nodes: &[PersonNode]) -> Vec<&str> {
        let mut ids: Vec<&str> = nodes.iter().map(|node| node.id().as_str()).collect();
        ids.sort_unstable();
        ids
    }

    #[fixture]
    fn controller() -> ViewController<PersonNode> {
        let mut controller = ViewController::new();
        controller.begin_refresh();
        controller.load(&hierarchy(small_org()));
        controller
    }

    #[rstest]
    fn load_resets_state_and_options(mut controller: ViewController<PersonNode>) {
        assert!(!controller.is_loading());
        assert_eq!(controller.nodes().len(), 6);
        assert_eq!(controller.business_unit_options().len(), 2);
        assert!(controller.cost_center_options().is_empty());
        assert_eq!(controller.department_options().len(), 5);

        controller.select_business_unit(Some("Retail")).expect("select");
        controller.begin_refresh();
        controller.load(&hierarchy(small_org()));
        assert!(!controller.selection().is_active());
    }

    #[rstest]
    fn selections_are_rejected_while_loading(mut controller: ViewController<PersonNode>) {
        controller.begin_refresh();
        assert!(controller.is_loading());
        assert_eq!(
            controller.select_business_unit(Some("Retail")),
            Err(ControllerError::Loading)
        );
    }

    #[rstest]
    fn business_unit_cascades_and_clears(mut controller: ViewController<PersonNode>) {
        controller.select_business_unit(Some("Retail")).expect("bu");
        controller.select_cost_center(Some("Bodega")).expect("cc");
        controller.select_department(Some("Logística")).expect("dept");
        assert_eq!(ids(&controller.visible_nodes()), vec!["E-1", "E-2", "P-5"]);

        controller.select_business_unit(Some("Corp")).expect("bu");
        assert_eq!(controller.selection().cost_center, None);
        assert_eq!(controller.selection().department, None);
        let labels: Vec<&str> = controller
            .cost_center_options()
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Dir", "Finanzas"]);
        assert_eq!(
            controller.select_cost_center(Some("Bodega")),
            Err(ControllerError::UnknownOption {
                field: "cost center",
                value: "Bodega".to_owned()
            })
        );

        controller.select_business_unit(None).expect("clear");
        assert!(controller.cost_center_options().is_empty());
        assert_eq!(controller.visible_nodes().len(), 6);
    }

    #[rstest]
    fn visible_nodes_are_sorted_and_repeatable(mut controller: ViewController<PersonNode>) {
        controller.select_department(Some("Ventas")).expect("dept");
        let first = controller.visible_nodes();
        let titles: Vec<&str> = first.iter().map(|node| node.title.as_str()).collect();
        assert_eq!(titles, vec!["Puesto E-1", "Puesto E-2", "Puesto E-4"]);
        assert_eq!(controller.visible_nodes(), first);
    }

    #[test]
    fn detached_roots_are_not_visible() {
        let mut nodes = small_org();
        nodes.push(person_in("E-50", None, ("Retail", "Tiendas", "Ventas")));
        let mut controller = ViewController::new();
        controller.load(&hierarchy(nodes));
        assert!(controller.nodes().iter().all(|node| node.id().as_str() != "E-50"));
    }

    #[rstest]
    fn restricted_viewer_is_locked_to_own_units(mut controller: ViewController<PersonNode>) {
        let mut nodes = small_org();
        nodes[3].login = "vendedor".to_owned();
        nodes[3].reports_to_code = "00002".to_owned();
        let policy = AccessPolicy::from_config(&OrgChartConfig::default()).expect("policy");
        let viewer = policy.resolve_viewer_from_people("vendedor", &nodes);
        assert!(!viewer.can_view_all());

        controller.apply_viewer(viewer);
        assert!(controller.is_locked());
        assert_eq!(controller.selection().business_unit.as_deref(), Some("Retail"));
        assert_eq!(controller.selection().cost_center.as_deref(), Some("Tiendas"));
        assert_eq!(controller.select_department(None), Err(ControllerError::Locked));
        assert_eq!(ids(&controller.visible_nodes()), vec!["E-1", "E-2", "E-4"]);

        controller.begin_refresh();
        controller.load(&hierarchy(small_org()));
        assert_eq!(controller.selection().department.as_deref(), Some("Ventas"));
    }

    #[rstest]
    fn privileged_viewer_stays_interactive(mut controller: ViewController<PersonNode>) {
        controller.apply_viewer(Viewer::unrestricted("admin"));
        assert!(!controller.is_locked());
        assert!(!controller.selection().is_active());
        controller.select_business_unit(Some("Corp")).expect("bu");
    }
}
