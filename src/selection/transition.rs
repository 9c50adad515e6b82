//! Transition engine
//!
//! Every operation maps `(state, catalog, id)` to a complete next state. An id
//! that does not resolve in the selected grade yields a [`TransitionError`]
//! and the caller keeps the state it already has.
//!
//! Toggles are the click behavior of the tree: activating the node that is
//! already expanded collapses it without touching the selection, activating
//! anything else expands it and selects it. Leaf standards have no expansion
//! and always just select.

use super::{Level, NodeRef, Selection};
use crate::catalog::{Catalog, ClusterId, Grade, StandardChildren};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("{level} {id:?} not found in the selected grade")]
    Unresolved { level: Level, id: String },

    #[error("cannot resolve {level} {id:?}: no grade selected")]
    NoGradeSelected { level: Level, id: String },
}

impl TransitionError {
    fn unresolved(level: Level, id: impl Into<String>) -> Self {
        Self::Unresolved {
            level,
            id: id.into(),
        }
    }
}

/// A user intent against the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetGrade(String),
    ToggleDomain(String),
    SelectDomain(String),
    ToggleCluster(ClusterId),
    SelectCluster(ClusterId),
    ToggleStandard(String),
    SelectStandard(String),
    SelectSubStandard(String),
    Expand(NodeRef),
    Collapse(NodeRef),
    CollapseAll,
}

impl Action {
    /// What clicking (or pressing Enter on) a tree row does
    pub fn activate(node: &NodeRef) -> Self {
        match node {
            NodeRef::Domain(id) => Action::ToggleDomain(id.clone()),
            NodeRef::Cluster(id) => Action::ToggleCluster(id.clone()),
            NodeRef::Standard(code) => Action::ToggleStandard(code.clone()),
            NodeRef::SubStandard(code) => Action::SelectSubStandard(code.clone()),
        }
    }
}

/// Dispatch an action to its transition
pub fn apply(
    state: &Selection,
    catalog: &Catalog,
    action: &Action,
) -> Result<Selection, TransitionError> {
    match action {
        Action::SetGrade(id) => set_grade(state, catalog, id),
        Action::ToggleDomain(id) => toggle_domain(state, catalog, id),
        Action::SelectDomain(id) => select_domain(state, catalog, id),
        Action::ToggleCluster(id) => toggle_cluster(state, catalog, id),
        Action::SelectCluster(id) => select_cluster(state, catalog, id),
        Action::ToggleStandard(code) => toggle_standard(state, catalog, code),
        Action::SelectStandard(code) => select_standard(state, catalog, code),
        Action::SelectSubStandard(code) => select_sub_standard(state, catalog, code),
        Action::Expand(node) => expand(state, catalog, node),
        Action::Collapse(node) => collapse(state, catalog, node),
        Action::CollapseAll => Ok(collapse_all(state)),
    }
}

/// Resolve the grade every non-grade lookup is scoped to
fn selected_grade<'c>(
    state: &Selection,
    catalog: &'c Catalog,
    level: Level,
    id: &str,
) -> Result<&'c Grade, TransitionError> {
    let grade_id = state
        .grade
        .as_deref()
        .ok_or_else(|| TransitionError::NoGradeSelected {
            level,
            id: id.to_string(),
        })?;
    catalog
        .grade(grade_id)
        .ok_or_else(|| TransitionError::unresolved(Level::Grade, grade_id))
}

// ─────────────────────────────────────────────────────────────────────────────
// Grade
// ─────────────────────────────────────────────────────────────────────────────

/// Start over in another grade; nothing below the grade survives
pub fn set_grade(
    _state: &Selection,
    catalog: &Catalog,
    grade_id: &str,
) -> Result<Selection, TransitionError> {
    let grade = catalog
        .grade(grade_id)
        .ok_or_else(|| TransitionError::unresolved(Level::Grade, grade_id))?;

    Ok(Selection {
        grade: Some(grade.id.clone()),
        grade_name: Some(grade.name.clone()),
        ..Selection::default()
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Domain
// ─────────────────────────────────────────────────────────────────────────────

pub fn toggle_domain(
    state: &Selection,
    catalog: &Catalog,
    domain_id: &str,
) -> Result<Selection, TransitionError> {
    let grade = selected_grade(state, catalog, Level::Domain, domain_id)?;
    let domain = grade
        .find_domain(domain_id)
        .ok_or_else(|| TransitionError::unresolved(Level::Domain, domain_id))?;

    let mut next = state.clone();
    if state.expanded_domain.as_deref() == Some(domain_id) {
        next.expanded_domain = None;
    } else {
        next.expanded_domain = Some(domain.id.clone());
        next.expanded_cluster = None;
        next.expanded_standard = None;
        next.set_domain(domain);
    }
    Ok(next)
}

pub fn select_domain(
    state: &Selection,
    catalog: &Catalog,
    domain_id: &str,
) -> Result<Selection, TransitionError> {
    let grade = selected_grade(state, catalog, Level::Domain, domain_id)?;
    let domain = grade
        .find_domain(domain_id)
        .ok_or_else(|| TransitionError::unresolved(Level::Domain, domain_id))?;

    let mut next = state.clone();
    next.set_domain(domain);
    Ok(next)
}

// ─────────────────────────────────────────────────────────────────────────────
// Cluster
// ─────────────────────────────────────────────────────────────────────────────

pub fn toggle_cluster(
    state: &Selection,
    catalog: &Catalog,
    cluster_id: &ClusterId,
) -> Result<Selection, TransitionError> {
    let id = cluster_id.to_string();
    let grade = selected_grade(state, catalog, Level::Cluster, &id)?;
    let cluster = grade
        .find_cluster(cluster_id)
        .ok_or_else(|| TransitionError::unresolved(Level::Cluster, id))?;

    let mut next = state.clone();
    if state.expanded_cluster.as_ref() == Some(cluster_id) {
        next.expanded_cluster = None;
    } else {
        next.expanded_cluster = Some(cluster.id.clone());
        next.expanded_standard = None;
        next.set_cluster(cluster);
    }
    Ok(next)
}

pub fn select_cluster(
    state: &Selection,
    catalog: &Catalog,
    cluster_id: &ClusterId,
) -> Result<Selection, TransitionError> {
    let id = cluster_id.to_string();
    let grade = selected_grade(state, catalog, Level::Cluster, &id)?;
    let cluster = grade
        .find_cluster(cluster_id)
        .ok_or_else(|| TransitionError::unresolved(Level::Cluster, id))?;

    let mut next = state.clone();
    next.set_cluster(cluster);
    Ok(next)
}

// ─────────────────────────────────────────────────────────────────────────────
// Standard / sub-standard
// ─────────────────────────────────────────────────────────────────────────────

pub fn toggle_standard(
    state: &Selection,
    catalog: &Catalog,
    code: &str,
) -> Result<Selection, TransitionError> {
    let grade = selected_grade(state, catalog, Level::Standard, code)?;
    let standard = grade
        .find_standard_by_code(code)
        .ok_or_else(|| TransitionError::unresolved(Level::Standard, code))?;

    let mut next = state.clone();
    match standard.children {
        StandardChildren::Leaf => next.set_standard(standard),
        StandardChildren::SubStandards(_) => {
            if state.expanded_standard.as_deref() == Some(code) {
                next.expanded_standard = None;
            } else {
                next.expanded_standard = Some(standard.code.clone());
                next.set_standard(standard);
            }
        }
    }
    Ok(next)
}

pub fn select_standard(
    state: &Selection,
    catalog: &Catalog,
    code: &str,
) -> Result<Selection, TransitionError> {
    let grade = selected_grade(state, catalog, Level::Standard, code)?;
    let standard = grade
        .find_standard_by_code(code)
        .ok_or_else(|| TransitionError::unresolved(Level::Standard, code))?;

    let mut next = state.clone();
    next.set_standard(standard);
    Ok(next)
}

/// Select a sub-standard by code
///
/// Membership in the selected standard is not checked; the tree only ever
/// offers sub-standards of the expanded standard.
pub fn select_sub_standard(
    state: &Selection,
    catalog: &Catalog,
    code: &str,
) -> Result<Selection, TransitionError> {
    let grade = selected_grade(state, catalog, Level::SubStandard, code)?;
    let sub = grade
        .find_sub_standard_by_code(code)
        .ok_or_else(|| TransitionError::unresolved(Level::SubStandard, code))?;

    let mut next = state.clone();
    next.set_sub_standard(sub);
    Ok(next)
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyboard expansion
// ─────────────────────────────────────────────────────────────────────────────

/// Show a node's children without changing the selection
///
/// Replacing a level's slot clears the slots beneath it, the same as a
/// toggle does. Leaves are not expandable and come back unchanged.
pub fn expand(
    state: &Selection,
    catalog: &Catalog,
    node: &NodeRef,
) -> Result<Selection, TransitionError> {
    let grade = selected_grade(state, catalog, node.level(), &node.id())?;
    let mut next = state.clone();

    match node {
        NodeRef::Domain(id) => {
            let domain = grade
                .find_domain(id)
                .ok_or_else(|| TransitionError::unresolved(Level::Domain, id.as_str()))?;
            if next.expanded_domain.as_ref() != Some(&domain.id) {
                next.expanded_domain = Some(domain.id.clone());
                next.expanded_cluster = None;
                next.expanded_standard = None;
            }
        }
        NodeRef::Cluster(id) => {
            let cluster = grade
                .find_cluster(id)
                .ok_or_else(|| TransitionError::unresolved(Level::Cluster, id.to_string()))?;
            if next.expanded_cluster.as_ref() != Some(&cluster.id) {
                next.expanded_cluster = Some(cluster.id.clone());
                next.expanded_standard = None;
            }
        }
        NodeRef::Standard(code) => {
            let standard = grade
                .find_standard_by_code(code)
                .ok_or_else(|| TransitionError::unresolved(Level::Standard, code.as_str()))?;
            if standard.has_sub_standards() {
                next.expanded_standard = Some(standard.code.clone());
            }
        }
        NodeRef::SubStandard(code) => {
            grade
                .find_sub_standard_by_code(code)
                .ok_or_else(|| TransitionError::unresolved(Level::SubStandard, code.as_str()))?;
        }
    }

    Ok(next)
}

/// Hide a node's children if they are showing
pub fn collapse(
    state: &Selection,
    catalog: &Catalog,
    node: &NodeRef,
) -> Result<Selection, TransitionError> {
    let grade = selected_grade(state, catalog, node.level(), &node.id())?;
    let resolved = match node {
        NodeRef::Domain(id) => grade.find_domain(id).is_some(),
        NodeRef::Cluster(id) => grade.find_cluster(id).is_some(),
        NodeRef::Standard(code) => grade.find_standard_by_code(code).is_some(),
        NodeRef::SubStandard(code) => grade.find_sub_standard_by_code(code).is_some(),
    };
    if !resolved {
        return Err(TransitionError::unresolved(node.level(), node.id()));
    }

    let mut next = state.clone();
    if state.is_expanded(node) {
        match node {
            NodeRef::Domain(_) => next.expanded_domain = None,
            NodeRef::Cluster(_) => next.expanded_cluster = None,
            NodeRef::Standard(_) => next.expanded_standard = None,
            NodeRef::SubStandard(_) => {}
        }
    }
    Ok(next)
}

/// Close every open node; the selection stays where it is
pub fn collapse_all(state: &Selection) -> Selection {
    Selection {
        expanded_domain: None,
        expanded_cluster: None,
        expanded_standard: None,
        ..state.clone()
    }
}
