//! Grade-scoped lookups
//!
//! Every lookup is a linear scan over vectors kept in document order. A grade
//! holds a handful of domains and tens to low hundreds of standards, so no
//! id index is kept beside the vectors. Ids are unique at each level once
//! decoded, so the first match is the only one.

use super::{Cluster, ClusterId, Domain, Grade, Standard, SubStandard};

impl Grade {
    pub fn find_domain(&self, id: &str) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    pub fn find_cluster(&self, id: &ClusterId) -> Option<&Cluster> {
        self.find_domain(&id.domain)?
            .clusters
            .iter()
            .find(|c| c.id.key == id.key)
    }

    /// Every standard in the grade, in document order
    pub fn standards(&self) -> impl Iterator<Item = &Standard> {
        self.domains
            .iter()
            .flat_map(|d| d.clusters.iter())
            .flat_map(|c| c.standards.iter())
    }

    /// First standard whose code matches (codes are unique, so the only one)
    pub fn find_standard_by_code(&self, code: &str) -> Option<&Standard> {
        self.standards().find(|s| s.code == code)
    }

    /// Same scan one level deeper, into every standard's sub-standards
    pub fn find_sub_standard_by_code(&self, code: &str) -> Option<&SubStandard> {
        self.standards()
            .flat_map(|s| s.sub_standards().iter())
            .find(|sub| sub.code == code)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{fixtures, ClusterId};

    #[test]
    fn test_find_domain() {
        let catalog = fixtures::sample();
        let k = catalog.grade("K").unwrap();

        assert_eq!(k.find_domain("OA").unwrap().name, "Operations & Algebraic Thinking");
        assert!(k.find_domain("NBT").is_none()); // lives in grade 1
    }

    #[test]
    fn test_find_cluster() {
        let catalog = fixtures::sample();
        let k = catalog.grade("K").unwrap();

        let cluster = k.find_cluster(&ClusterId::new("CC", "B")).unwrap();
        assert_eq!(cluster.name, "Count to tell the number of objects");

        // Same key under another domain is a different cluster
        let other = k.find_cluster(&ClusterId::new("OA", "A")).unwrap();
        assert_ne!(other.name, k.find_cluster(&ClusterId::new("CC", "A")).unwrap().name);

        assert!(k.find_cluster(&ClusterId::new("CC", "Z")).is_none());
        assert!(k.find_cluster(&ClusterId::new("ZZ", "A")).is_none());
    }

    #[test]
    fn test_find_standard_by_code() {
        let catalog = fixtures::sample();
        let k = catalog.grade("K").unwrap();

        for code in ["K.CC.1", "K.CC.2", "K.CC.3", "K.CC.4", "K.OA.1"] {
            assert_eq!(k.find_standard_by_code(code).unwrap().code, code);
        }
        assert!(k.find_standard_by_code("K.CC.1.a").is_none());
        // Scoped to the grade
        assert!(k.find_standard_by_code("1.NBT.1").is_none());
        assert!(catalog
            .grade("1")
            .unwrap()
            .find_standard_by_code("1.NBT.1")
            .is_some());
    }

    #[test]
    fn test_find_sub_standard_by_code() {
        let catalog = fixtures::sample();
        let k = catalog.grade("K").unwrap();

        let sub = k.find_sub_standard_by_code("K.CC.1.b").unwrap();
        assert_eq!(sub.display_name(), "Tens");
        assert_eq!(k.find_sub_standard_by_code("K.CC.1.a").unwrap().display_name(), "K.CC.1.a");

        assert!(k.find_sub_standard_by_code("K.CC.2").is_none());
        assert!(k.find_sub_standard_by_code("missing").is_none());
    }
}
