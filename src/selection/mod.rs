//! Selection state and the transitions that drive it
//!
//! A [`Selection`] records two independent things about the tree:
//!
//! - **selection**: the path grade → domain → cluster → standard →
//!   sub-standard whose content the preview shows
//! - **expansion**: at most one open node per level, deciding which children
//!   the tree shows
//!
//! Transitions in [`transition`] are pure: they take the current state and
//! return the next one, or an error that leaves the caller's state untouched.

mod state;
pub mod transition;

pub use state::Selection;
pub use transition::{apply, Action};

use crate::catalog::ClusterId;
use std::fmt;

/// Depth in the catalog hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Grade,
    Domain,
    Cluster,
    Standard,
    SubStandard,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Grade => "grade",
            Level::Domain => "domain",
            Level::Cluster => "cluster",
            Level::Standard => "standard",
            Level::SubStandard => "sub-standard",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a node shown in the navigation tree
///
/// Standards and sub-standards are addressed by code; domains by id;
/// clusters by their composite id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeRef {
    Domain(String),
    Cluster(ClusterId),
    Standard(String),
    SubStandard(String),
}

impl NodeRef {
    pub fn level(&self) -> Level {
        match self {
            NodeRef::Domain(_) => Level::Domain,
            NodeRef::Cluster(_) => Level::Cluster,
            NodeRef::Standard(_) => Level::Standard,
            NodeRef::SubStandard(_) => Level::SubStandard,
        }
    }

    /// The identifier as it appears in diagnostics
    pub fn id(&self) -> String {
        match self {
            NodeRef::Domain(id) | NodeRef::Standard(id) | NodeRef::SubStandard(id) => id.clone(),
            NodeRef::Cluster(id) => id.to_string(),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.level(), self.id())
    }
}
