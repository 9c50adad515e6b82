//! Navigation tree projection
//!
//! The tree is flattened into the rows currently visible: every domain of the
//! grade, the clusters of the expanded domain, the standards of the expanded
//! cluster and the sub-standards of the expanded standard. Collapsed subtrees
//! produce no rows at all.

use super::labels::nav_label;
use crate::catalog::{Catalog, Cluster, Domain, Standard};
use crate::selection::{NodeRef, Selection};

pub const NO_GRADE_MESSAGE: &str = "Please select a grade level.";
pub const EMPTY_GRADE_MESSAGE: &str = "No standards available for this grade.";

/// Disclosure marker of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expander {
    /// No children to show
    Leaf,
    Collapsed,
    Expanded,
}

impl Expander {
    fn from_expanded(expanded: bool) -> Self {
        if expanded {
            Expander::Expanded
        } else {
            Expander::Collapsed
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Expander::Leaf => " ",
            Expander::Collapsed => "▶",
            Expander::Expanded => "▼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRow {
    pub node: NodeRef,
    /// 0 for domains, 3 for sub-standards
    pub depth: usize,
    pub label: String,
    pub selected: bool,
    pub expander: Expander,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTree {
    NoGrade,
    Empty,
    Rows(Vec<NavRow>),
}

impl NavTree {
    /// Placeholder text when there are no rows
    pub fn message(&self) -> Option<&'static str> {
        match self {
            NavTree::NoGrade => Some(NO_GRADE_MESSAGE),
            NavTree::Empty => Some(EMPTY_GRADE_MESSAGE),
            NavTree::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[NavRow] {
        match self {
            NavTree::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Index of the row that owns `index`, if it is not a top-level row
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        let rows = self.rows();
        let depth = rows.get(index)?.depth;
        rows[..index].iter().rposition(|row| row.depth < depth)
    }

    /// Index of the row showing `node`
    pub fn position(&self, node: &NodeRef) -> Option<usize> {
        self.rows().iter().position(|row| &row.node == node)
    }
}

/// Project the visible rows for the selected grade
pub fn project(state: &Selection, catalog: &Catalog, label_width: usize) -> NavTree {
    let Some(grade) = state.grade.as_deref().and_then(|id| catalog.grade(id)) else {
        return NavTree::NoGrade;
    };
    if grade.domains.is_empty() {
        return NavTree::Empty;
    }

    let mut rows = Vec::new();
    for domain in &grade.domains {
        push_domain(&mut rows, state, domain, label_width);
    }
    NavTree::Rows(rows)
}

fn push_domain(rows: &mut Vec<NavRow>, state: &Selection, domain: &Domain, label_width: usize) {
    let node = NodeRef::Domain(domain.id.clone());
    let expanded = state.is_expanded(&node);
    rows.push(NavRow {
        label: nav_label(&domain.name, label_width),
        selected: state.is_selected(&node),
        expander: Expander::from_expanded(expanded),
        depth: 0,
        node,
    });

    if expanded {
        for cluster in &domain.clusters {
            push_cluster(rows, state, cluster, label_width);
        }
    }
}

fn push_cluster(rows: &mut Vec<NavRow>, state: &Selection, cluster: &Cluster, label_width: usize) {
    let node = NodeRef::Cluster(cluster.id.clone());
    let expanded = state.is_expanded(&node);
    rows.push(NavRow {
        label: nav_label(&cluster.name, label_width),
        selected: state.is_selected(&node),
        expander: Expander::from_expanded(expanded),
        depth: 1,
        node,
    });

    if expanded {
        for standard in &cluster.standards {
            push_standard(rows, state, standard);
        }
    }
}

fn push_standard(rows: &mut Vec<NavRow>, state: &Selection, standard: &Standard) {
    let node = NodeRef::Standard(standard.code.clone());
    let expanded = state.is_expanded(&node);
    let expander = if standard.has_sub_standards() {
        Expander::from_expanded(expanded)
    } else {
        Expander::Leaf
    };
    rows.push(NavRow {
        label: standard.display_name().to_string(),
        selected: state.is_selected(&node),
        expander,
        depth: 2,
        node,
    });

    if expanded {
        for sub in standard.sub_standards() {
            let node = NodeRef::SubStandard(sub.code.clone());
            rows.push(NavRow {
                label: sub.display_name().to_string(),
                selected: state.is_selected(&node),
                expander: Expander::Leaf,
                depth: 3,
                node,
            });
        }
    }
}
