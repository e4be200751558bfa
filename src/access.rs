// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Capability resolution for the signed-in viewer.
//!
//! Job-title matching happens once, when the viewer is resolved; everything downstream only
//! looks at [`Privileges`].

use std::collections::{BTreeSet, HashSet};

use regex::{Regex, RegexBuilder};

use crate::config::{ConfigError, OrgChartConfig};
use crate::format::normalize_login;
use crate::model::{ChartNode, HierarchyNode, OrgUnit, PersonNode, PositionNode};
use crate::query::UnitFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Privilege {
    /// See the whole chart and pick any filter.
    ViewAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Privileges(BTreeSet<Privilege>);

impl Privileges {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self(BTreeSet::from([Privilege::ViewAll]))
    }

    pub fn contains(&self, privilege: Privilege) -> bool {
        self.0.contains(&privilege)
    }

    pub fn iter(&self) -> impl Iterator<Item = Privilege> + '_ {
        self.0.iter().copied()
    }
}

/// Who is looking at the chart, and what they may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    login: String,
    privileges: Privileges,
    units: UnitFilter,
}

impl Viewer {
    /// A viewer with every privilege and no unit of their own.
    pub fn unrestricted(login: &str) -> Self {
        Self {
            login: normalize_login(login),
            privileges: Privileges::all(),
            units: UnitFilter::default(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn privileges(&self) -> &Privileges {
        &self.privileges
    }

    /// The viewer's own business unit, cost center and department.
    pub fn units(&self) -> &UnitFilter {
        &self.units
    }

    pub fn can_view_all(&self) -> bool {
        self.privileges.contains(Privilege::ViewAll)
    }
}

/// Keyword policy deciding who gets [`Privilege::ViewAll`].
///
/// A viewer is privileged when their job title matches a keyword (case-insensitive, anywhere in
/// the title), when they report to nobody or to the top position, or when their position is
/// listed in `full_access_positions`.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    titles: Option<Regex>,
    top_position_code: String,
    full_access_positions: HashSet<String>,
}

impl AccessPolicy {
    /// Each keyword is a regex fragment; plain words match as substrings.
    pub fn from_config(config: &OrgChartConfig) -> Result<Self, ConfigError> {
        let mut fragments: Vec<String> = Vec::with_capacity(config.access.keywords.len());
        for keyword in &config.access.keywords {
            let keyword = keyword.trim();
            if keyword.is_empty() {
                continue;
            }
            compile(keyword).map_err(|source| ConfigError::InvalidKeyword {
                keyword: keyword.to_owned(),
                source: Box::new(source),
            })?;
            fragments.push(format!("(?:{keyword})"));
        }

        let titles = if fragments.is_empty() {
            None
        } else {
            let pattern = fragments.join("|");
            Some(compile(&pattern).map_err(|source| ConfigError::InvalidKeyword {
                keyword: pattern,
                source: Box::new(source),
            })?)
        };

        Ok(Self {
            titles,
            top_position_code: config.hierarchy.top_position_code.clone(),
            full_access_positions: config
                .access
                .full_access_positions
                .iter()
                .map(|code| code.trim().to_owned())
                .collect(),
        })
    }

    pub fn title_grants_full_view(&self, title: &str) -> bool {
        self.titles
            .as_ref()
            .is_some_and(|regex| regex.is_match(title))
    }

    pub fn privileges(
        &self,
        title: &str,
        reports_to_code: &str,
        position_code: &str,
    ) -> Privileges {
        let privileged = self.title_grants_full_view(title)
            || reports_to_code.is_empty()
            || reports_to_code == self.top_position_code
            || self.full_access_positions.contains(position_code);
        if privileged {
            Privileges::all()
        } else {
            Privileges::none()
        }
    }

    /// Resolves `login` against the by-person nodes.
    pub fn resolve_viewer_from_people(&self, login: &str, nodes: &[PersonNode]) -> Viewer {
        let login = normalize_login(login);
        let found = nodes
            .iter()
            .find(|node| !node.is_vacant() && !login.is_empty() && node.login() == login);
        match found {
            Some(node) => Viewer {
                privileges: self.privileges(
                    node.title(),
                    node.reports_to_code(),
                    node.position_code(),
                ),
                units: own_units(node),
                login,
            },
            None => unknown_viewer(login),
        }
    }

    /// Resolves `login` against the occupants of the by-position nodes.
    ///
    /// The occupant's job title is matched, falling back to the position title.
    pub fn resolve_viewer_from_positions(&self, login: &str, nodes: &[PositionNode]) -> Viewer {
        let login = normalize_login(login);
        let found = nodes.iter().find_map(|node| {
            node.occupants()
                .iter()
                .find(|employee| !login.is_empty() && employee.login() == login)
                .map(|employee| (node, employee))
        });
        match found {
            Some((node, employee)) => {
                let title = if employee.job_title().is_empty() {
                    node.title()
                } else {
                    employee.job_title()
                };
                Viewer {
                    privileges: self.privileges(
                        title,
                        node.reports_to_code(),
                        node.position_code(),
                    ),
                    units: own_units(node),
                    login,
                }
            }
            None => unknown_viewer(login),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

fn unit_name(unit: &OrgUnit) -> Option<String> {
    (!unit.name().is_empty()).then(|| unit.name().to_owned())
}

fn own_units<T: ChartNode>(node: &T) -> UnitFilter {
    UnitFilter {
        business_unit: unit_name(node.business_unit()),
        cost_center: unit_name(node.cost_center()),
        department: unit_name(node.department()),
    }
}

fn unknown_viewer(login: String) -> Viewer {
    log::warn!("viewer {login:?} not found in the chart; granting full view");
    Viewer {
        login,
        privileges: Privileges::all(),
        units: UnitFilter::default(),
    }
}
