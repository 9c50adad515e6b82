// Selection state
//
// One value per session. Names, codes and texts are copied out of the
// catalog when a node is selected so projection never has to look them up
// again.

use super::NodeRef;
use crate::catalog::{Cluster, ClusterId, Domain, Standard, SubStandard};
use serde::Serialize;

/// Current path through the catalog plus per-level expansion slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub grade: Option<String>,
    pub grade_name: Option<String>,

    pub domain: Option<String>,
    pub domain_name: Option<String>,

    pub cluster: Option<ClusterId>,
    pub cluster_name: Option<String>,

    pub standard: Option<String>,
    pub standard_code: Option<String>,
    pub standard_text: Option<String>,

    pub sub_standard: Option<String>,
    pub sub_standard_code: Option<String>,
    pub sub_standard_text: Option<String>,

    // Independent of selection: which single node per level shows children
    pub expanded_domain: Option<String>,
    pub expanded_cluster: Option<ClusterId>,
    pub expanded_standard: Option<String>,
}

impl Selection {
    /// Whether the node's children are visible
    pub fn is_expanded(&self, node: &NodeRef) -> bool {
        match node {
            NodeRef::Domain(id) => self.expanded_domain.as_ref() == Some(id),
            NodeRef::Cluster(id) => self.expanded_cluster.as_ref() == Some(id),
            NodeRef::Standard(code) => self.expanded_standard.as_ref() == Some(code),
            NodeRef::SubStandard(_) => false,
        }
    }

    /// Whether the node is on the selected path
    pub fn is_selected(&self, node: &NodeRef) -> bool {
        match node {
            NodeRef::Domain(id) => self.domain.as_ref() == Some(id),
            NodeRef::Cluster(id) => self.cluster.as_ref() == Some(id),
            NodeRef::Standard(code) => self.standard.as_ref() == Some(code),
            NodeRef::SubStandard(code) => self.sub_standard.as_ref() == Some(code),
        }
    }

    /// Whether any expansion slot is occupied
    pub fn has_expansion(&self) -> bool {
        self.expanded_domain.is_some()
            || self.expanded_cluster.is_some()
            || self.expanded_standard.is_some()
    }

    pub(super) fn set_domain(&mut self, domain: &Domain) {
        self.domain = Some(domain.id.clone());
        self.domain_name = Some(domain.name.clone());
        self.clear_cluster();
    }

    pub(super) fn set_cluster(&mut self, cluster: &Cluster) {
        self.cluster = Some(cluster.id.clone());
        self.cluster_name = Some(cluster.name.clone());
        self.clear_standard();
    }

    pub(super) fn set_standard(&mut self, standard: &Standard) {
        self.standard = Some(standard.code.clone());
        self.standard_code = Some(standard.code.clone());
        self.standard_text = Some(standard.text.clone());
        self.clear_sub_standard();
    }

    pub(super) fn set_sub_standard(&mut self, sub: &SubStandard) {
        self.sub_standard = Some(sub.code.clone());
        self.sub_standard_code = Some(sub.code.clone());
        self.sub_standard_text = Some(sub.text.clone());
    }

    /// Clear the cluster and everything selected beneath it
    fn clear_cluster(&mut self) {
        self.cluster = None;
        self.cluster_name = None;
        self.clear_standard();
    }

    fn clear_standard(&mut self) {
        self.standard = None;
        self.standard_code = None;
        self.standard_text = None;
        self.clear_sub_standard();
    }

    fn clear_sub_standard(&mut self) {
        self.sub_standard = None;
        self.sub_standard_code = None;
        self.sub_standard_text = None;
    }
}
