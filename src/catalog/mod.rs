//! Standards catalog - the read-only reference data behind the browser
//!
//! The catalog is a fixed five-level hierarchy:
//!
//! ```text
//! Grade ─► Domain ─► Cluster ─► Standard ─► SubStandard
//! ```
//!
//! It is decoded once from a JSON document (see [`raw`]), checked for the
//! invariants lookups rely on, and never mutated afterwards. Document order
//! is preserved at every level because it is the display order of the tree.

mod error;
pub mod loader;
mod lookup;
mod raw;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::CatalogError;
pub use loader::load;

use serde::{Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Separator between domain id and cluster key in a composite cluster id
pub const CLUSTER_SEPARATOR: char = '.';

// ─────────────────────────────────────────────────────────────────────────────
// Identifiers
// ─────────────────────────────────────────────────────────────────────────────

/// Composite cluster identifier: `domain` + `.` + `key`
///
/// Unique only within a grade + domain, so every lookup that takes one is
/// scoped to a grade.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClusterId {
    pub domain: String,
    pub key: String,
}

impl ClusterId {
    pub fn new(domain: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            key: key.into(),
        }
    }

    /// Split `"CC.A"` into domain `CC` and key `A` (first separator wins)
    pub fn parse(s: &str) -> Option<Self> {
        let (domain, key) = s.split_once(CLUSTER_SEPARATOR)?;
        if domain.is_empty() || key.is_empty() {
            return None;
        }
        Some(Self::new(domain, key))
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.domain, CLUSTER_SEPARATOR, self.key)
    }
}

impl Serialize for ClusterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Records
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level partition (e.g. "K" → "Kindergarten")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub id: String,
    pub name: String,
    pub domains: Vec<Domain>,
}

/// Named subject area within a grade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub id: String,
    /// Short name used in the tree and breadcrumb
    pub name: String,
    /// Long name used as the preview heading
    pub full_name: String,
    pub text: Option<String>,
    pub clusters: Vec<Cluster>,
}

/// Group of related standards within a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub id: ClusterId,
    pub name: String,
    pub text: Option<String>,
    pub standards: Vec<Standard>,
}

/// An addressable requirement, identified by its catalog-unique code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standard {
    /// Key in the parent cluster's mapping (not used for lookup)
    pub key: String,
    pub code: String,
    pub name: Option<String>,
    pub text: String,
    pub children: StandardChildren,
}

/// Whether a standard decomposes further
///
/// This is the branch the transition engine switches on: only standards with
/// sub-standards have an expand/collapse concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StandardChildren {
    Leaf,
    SubStandards(Vec<SubStandard>),
}

/// Finest-grained addressable unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubStandard {
    pub key: String,
    pub code: String,
    pub name: Option<String>,
    pub text: String,
}

impl Standard {
    /// Display name, falling back to the code
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }

    pub fn has_sub_standards(&self) -> bool {
        matches!(self.children, StandardChildren::SubStandards(_))
    }

    /// Sub-standards in document order (empty for leaves)
    pub fn sub_standards(&self) -> &[SubStandard] {
        match &self.children {
            StandardChildren::Leaf => &[],
            StandardChildren::SubStandards(subs) => subs,
        }
    }
}

impl SubStandard {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

/// The whole catalog, grades in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    grades: Vec<Grade>,
}

/// Node counts, used for the startup summary and load logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub grades: usize,
    pub domains: usize,
    pub clusters: usize,
    pub standards: usize,
    pub sub_standards: usize,
}

impl Catalog {
    /// Decode and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: raw::RawCatalog = serde_json::from_str(json)?;
        let catalog = Self::from_raw(raw);
        catalog.validate()?;
        Ok(catalog)
    }

    /// All grades in document order
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Resolve a grade by id
    pub fn grade(&self, id: &str) -> Option<&Grade> {
        self.grades.iter().find(|g| g.id == id)
    }

    /// Grade ids in document order
    pub fn grade_ids(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|g| g.id.as_str())
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            grades: self.grades.len(),
            ..Default::default()
        };
        for grade in &self.grades {
            stats.domains += grade.domains.len();
            for domain in &grade.domains {
                stats.clusters += domain.clusters.len();
            }
            for standard in grade.standards() {
                stats.standards += 1;
                stats.sub_standards += standard.sub_standards().len();
            }
        }
        stats
    }

    /// Check the invariants lookups depend on
    ///
    /// Standard codes and sub-standard codes must each be unique across the
    /// catalog, and domain ids must not contain the cluster separator.
    fn validate(&self) -> Result<(), CatalogError> {
        if self.grades.is_empty() {
            return Err(CatalogError::NoGrades);
        }

        let mut standard_codes = HashSet::new();
        let mut sub_codes = HashSet::new();

        for grade in &self.grades {
            for domain in &grade.domains {
                if domain.id.contains(CLUSTER_SEPARATOR) {
                    return Err(CatalogError::InvalidDomainId {
                        grade: grade.id.clone(),
                        id: domain.id.clone(),
                    });
                }
            }

            for standard in grade.standards() {
                if !standard_codes.insert(standard.code.as_str()) {
                    return Err(CatalogError::DuplicateStandardCode {
                        code: standard.code.clone(),
                    });
                }
                for sub in standard.sub_standards() {
                    if !sub_codes.insert(sub.code.as_str()) {
                        return Err(CatalogError::DuplicateSubStandardCode {
                            code: sub.code.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    fn from_raw(raw: raw::RawCatalog) -> Self {
        let grades = raw
            .grades
            .into_iter()
            .map(|(grade_id, grade)| Grade {
                id: grade_id,
                name: grade.name,
                domains: grade
                    .domains
                    .into_iter()
                    .map(|(domain_id, domain)| Domain {
                        full_name: domain.full_name.unwrap_or_else(|| domain.name.clone()),
                        name: domain.name,
                        text: domain.text,
                        clusters: domain
                            .clusters
                            .into_iter()
                            .map(|(key, cluster)| Cluster {
                                id: ClusterId::new(domain_id.clone(), key),
                                name: cluster.name,
                                text: cluster.text,
                                standards: cluster
                                    .standards
                                    .into_iter()
                                    .map(|(key, standard)| standard.into_standard(key))
                                    .collect(),
                            })
                            .collect(),
                        id: domain_id,
                    })
                    .collect(),
            })
            .collect();

        Self { grades }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures;

    #[test]
    fn test_document_order_is_preserved() {
        let catalog = fixtures::sample();

        let grades: Vec<_> = catalog.grade_ids().collect();
        assert_eq!(grades, vec!["K", "1"]);

        let k = catalog.grade("K").unwrap();
        let domains: Vec<_> = k.domains.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(domains, vec!["CC", "OA"]);

        let cc = &k.domains[0];
        let standards: Vec<_> = cc.clusters[0]
            .standards
            .iter()
            .map(|s| s.code.as_str())
            .collect();
        assert_eq!(standards, vec!["K.CC.1", "K.CC.2", "K.CC.3"]);
    }

    #[test]
    fn test_full_name_defaults_to_name() {
        let json = r#"{"grades": {"K": {"name": "Kindergarten", "domains": {
            "G": {"name": "Geometry"}
        }}}}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let domain = &catalog.grade("K").unwrap().domains[0];
        assert_eq!(domain.full_name, "Geometry");
        assert!(domain.clusters.is_empty());
    }

    #[test]
    fn test_empty_sub_standards_is_leaf() {
        let json = r#"{"grades": {"K": {"name": "Kindergarten", "domains": {
            "G": {"name": "Geometry", "clusters": {"A": {"name": "Shapes", "standards": {
                "1": {"code": "K.G.1", "text": "Describe objects.", "subStandards": {}}
            }}}}
        }}}}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let standard = &catalog.grade("K").unwrap().domains[0].clusters[0].standards[0];
        assert_eq!(standard.children, StandardChildren::Leaf);
        assert_eq!(standard.display_name(), "K.G.1");
    }

    #[test]
    fn test_null_children_are_empty() {
        let json = r#"{"grades": {"K": {"name": "Kindergarten", "domains": {
            "G": {"name": "Geometry", "clusters": null}
        }}}}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.grade("K").unwrap().domains[0].clusters.is_empty());
    }

    #[test]
    fn test_repeated_key_keeps_last_value_at_first_position() {
        let json = r#"{"grades": {
            "K": {"name": "Kindergarten", "domains": {
                "CC": {"name": "Old"},
                "G": {"name": "Geometry"},
                "CC": {"name": "New"}
            }},
            "1": {"name": "Grade 1"},
            "K": {"name": "Kinder", "domains": {
                "CC": {"name": "Old"},
                "G": {"name": "Geometry"},
                "CC": {"name": "New"}
            }}
        }}"#;
        let catalog = Catalog::from_json(json).unwrap();

        let grades: Vec<_> = catalog.grade_ids().collect();
        assert_eq!(grades, vec!["K", "1"]);

        let k = catalog.grade("K").unwrap();
        assert_eq!(k.name, "Kinder");
        let domains: Vec<_> = k
            .domains
            .iter()
            .map(|d| (d.id.as_str(), d.name.as_str()))
            .collect();
        assert_eq!(domains, vec![("CC", "New"), ("G", "Geometry")]);
        assert_eq!(k.find_domain("CC").unwrap().name, "New");
    }

    #[test]
    fn test_duplicate_standard_code_rejected() {
        let json = r#"{"grades": {
            "K": {"name": "Kindergarten", "domains": {"G": {"name": "Geometry", "clusters": {
                "A": {"name": "Shapes", "standards": {"1": {"code": "X.1", "text": "a"}}}}}}},
            "1": {"name": "Grade 1", "domains": {"G": {"name": "Geometry", "clusters": {
                "A": {"name": "Shapes", "standards": {"1": {"code": "X.1", "text": "b"}}}}}}}
        }}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateStandardCode { ref code } if code == "X.1"));
    }

    #[test]
    fn test_duplicate_sub_standard_code_rejected() {
        let json = r#"{"grades": {"K": {"name": "Kindergarten", "domains": {
            "G": {"name": "Geometry", "clusters": {"A": {"name": "Shapes", "standards": {
                "1": {"code": "K.G.1", "text": "a", "subStandards": {
                    "a": {"code": "K.G.1.a", "text": "x"},
                    "b": {"code": "K.G.1.a", "text": "y"}
                }}
            }}}}
        }}}}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSubStandardCode { .. }));
    }

    #[test]
    fn test_sub_code_may_repeat_standard_code() {
        // Degenerate but legal: the two code spaces are separate
        let catalog = fixtures::sample();
        let k = catalog.grade("K").unwrap();
        assert!(k.find_standard_by_code("K.CC.3").is_some());
        assert!(k.find_sub_standard_by_code("K.CC.3").is_some());
    }

    #[test]
    fn test_domain_id_with_separator_rejected() {
        let json = r#"{"grades": {"K": {"name": "Kindergarten", "domains": {
            "C.C": {"name": "Counting"}
        }}}}"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDomainId { .. }));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::from_json(r#"{"grades": {}}"#).unwrap_err();
        assert!(matches!(err, CatalogError::NoGrades));
    }

    #[test]
    fn test_malformed_document_rejected() {
        let err = Catalog::from_json(r#"{"grades": ["K"]}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));

        let err = Catalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_stats() {
        let stats = fixtures::sample().stats();
        assert_eq!(
            stats,
            CatalogStats {
                grades: 2,
                domains: 3,
                clusters: 4,
                standards: 6,
                sub_standards: 3,
            }
        );
    }

    #[test]
    fn test_cluster_id_parse() {
        assert_eq!(ClusterId::parse("CC.A"), Some(ClusterId::new("CC", "A")));
        // First separator wins - keys may contain dots, domain ids may not
        assert_eq!(ClusterId::parse("CC.A.1"), Some(ClusterId::new("CC", "A.1")));
        assert_eq!(ClusterId::parse("CC"), None);
        assert_eq!(ClusterId::parse(".A"), None);
        assert_eq!(ClusterId::new("NBT", "B").to_string(), "NBT.B");
    }
}
