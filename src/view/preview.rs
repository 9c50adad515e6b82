//! Preview projection
//!
//! Shows the deepest selected level that has content, falling back
//! sub-standard → standard → cluster → domain → grade summary. Without a
//! grade the welcome message is shown.

use crate::catalog::{Catalog, Grade};
use crate::selection::Selection;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewKind {
    Welcome,
    Grade,
    Domain,
    Cluster,
    Standard,
    SubStandard,
    Error,
}

/// One entry in a preview section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewItem {
    pub code: Option<String>,
    pub heading: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewSection {
    pub heading: String,
    pub items: Vec<PreviewItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub kind: PreviewKind,
    pub title: String,
    pub code: Option<String>,
    /// Paragraphs under the title
    pub body: Vec<String>,
    pub sections: Vec<PreviewSection>,
}

impl Preview {
    fn new(kind: PreviewKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            code: None,
            body: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn welcome() -> Self {
        let mut preview = Self::new(
            PreviewKind::Welcome,
            "Welcome to the Common Core Standards Browser",
        );
        preview.body = vec![
            "Select a grade level above to begin browsing mathematics standards.".to_string(),
            "Click on domains, clusters, or individual standards to view their content."
                .to_string(),
        ];
        preview
    }

    /// Persistent error shown in place of content (e.g. the catalog failed to load)
    pub fn error(message: impl Into<String>) -> Self {
        let mut preview = Self::new(PreviewKind::Error, "Error");
        preview.body = vec![message.into()];
        preview
    }

    fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    fn with_text(mut self, text: Option<&str>) -> Self {
        if let Some(text) = text.filter(|t| !t.is_empty()) {
            self.body.push(text.to_string());
        }
        self
    }

    /// Add a section unless it would be empty
    fn with_section(mut self, heading: impl Into<String>, items: Vec<PreviewItem>) -> Self {
        if !items.is_empty() {
            self.sections.push(PreviewSection {
                heading: heading.into(),
                items,
            });
        }
        self
    }

    /// Render as plain text (clipboard, headless output)
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        if let Some(code) = &self.code {
            out.push_str(code);
            out.push('\n');
        }
        for paragraph in &self.body {
            out.push('\n');
            out.push_str(paragraph);
            out.push('\n');
        }
        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.heading);
            out.push('\n');
            for item in &section.items {
                let line = item.line();
                if !line.is_empty() {
                    out.push_str("  ");
                    out.push_str(&line);
                    out.push('\n');
                }
                if let Some(text) = &item.text {
                    out.push_str("    ");
                    out.push_str(text);
                    out.push('\n');
                }
            }
        }
        out
    }
}

impl PreviewItem {
    /// Code and heading on one line: `K.CC.A: Know number names`
    pub fn line(&self) -> String {
        match (&self.code, &self.heading) {
            (Some(code), Some(heading)) => format!("{code}: {heading}"),
            (Some(only), None) | (None, Some(only)) => only.clone(),
            (None, None) => String::new(),
        }
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

/// Project the preview for the current selection
pub fn project(state: &Selection, catalog: &Catalog) -> Preview {
    let Some(grade) = state.grade.as_deref().and_then(|id| catalog.grade(id)) else {
        return Preview::welcome();
    };

    sub_standard_preview(state, grade)
        .or_else(|| standard_preview(state, grade))
        .or_else(|| cluster_preview(state, grade))
        .or_else(|| domain_preview(state, grade))
        .unwrap_or_else(|| grade_preview(grade))
}

fn sub_standard_preview(state: &Selection, grade: &Grade) -> Option<Preview> {
    if !present(&state.sub_standard) || !present(&state.sub_standard_text) {
        return None;
    }
    let code = state.sub_standard_code.as_deref()?;
    let title = grade
        .find_sub_standard_by_code(code)
        .map_or(code, |sub| sub.display_name());

    Some(
        Preview::new(PreviewKind::SubStandard, title)
            .with_code(code)
            .with_text(state.sub_standard_text.as_deref()),
    )
}

fn standard_preview(state: &Selection, grade: &Grade) -> Option<Preview> {
    if !present(&state.standard) || !present(&state.standard_text) {
        return None;
    }
    let code = state.standard_code.as_deref()?;
    let standard = grade.find_standard_by_code(code);
    let title = standard.map_or(code, |s| s.display_name());

    let subs = standard
        .map(|s| s.sub_standards())
        .unwrap_or_default()
        .iter()
        .map(|sub| PreviewItem {
            code: Some(sub.code.clone()),
            heading: None,
            text: Some(sub.text.clone()),
        })
        .collect();

    Some(
        Preview::new(PreviewKind::Standard, title)
            .with_code(code)
            .with_text(state.standard_text.as_deref())
            .with_section("Sub-standards:", subs),
    )
}

fn cluster_preview(state: &Selection, grade: &Grade) -> Option<Preview> {
    if !present(&state.cluster_name) {
        return None;
    }
    let cluster = grade.find_cluster(state.cluster.as_ref()?)?;

    let standards = cluster
        .standards
        .iter()
        .map(|s| PreviewItem {
            code: Some(s.code.clone()),
            heading: s.name.clone(),
            text: Some(s.text.clone()),
        })
        .collect();

    Some(
        Preview::new(PreviewKind::Cluster, cluster.name.as_str())
            .with_code(format!("{}.{}", grade.id, cluster.id))
            .with_text(cluster.text.as_deref())
            .with_section("Standards in this Cluster:", standards),
    )
}

fn domain_preview(state: &Selection, grade: &Grade) -> Option<Preview> {
    if !present(&state.domain_name) {
        return None;
    }
    let domain = grade.find_domain(state.domain.as_deref()?)?;

    let clusters = domain
        .clusters
        .iter()
        .map(|c| PreviewItem {
            code: Some(format!("{}.{}", grade.id, c.id)),
            heading: Some(c.name.clone()),
            text: c.text.clone(),
        })
        .collect();

    Some(
        Preview::new(PreviewKind::Domain, domain.full_name.as_str())
            .with_code(format!("{}.{}", grade.id, domain.id))
            .with_text(domain.text.as_deref())
            .with_section("Clusters in this Domain:", clusters),
    )
}

fn grade_preview(grade: &Grade) -> Preview {
    let domains = grade
        .domains
        .iter()
        .map(|d| PreviewItem {
            code: Some(format!("{}.{}", grade.id, d.id)),
            heading: Some(d.full_name.clone()),
            text: None,
        })
        .collect();

    Preview::new(
        PreviewKind::Grade,
        format!("{} Mathematics Standards", grade.name),
    )
    .with_section(format!("Domains for {}:", grade.name), domains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, ClusterId};
    use crate::selection::transition::*;

    fn in_k(catalog: &Catalog) -> Selection {
        set_grade(&Selection::default(), catalog, "K").unwrap()
    }

    #[test]
    fn test_welcome_without_grade() {
        let preview = project(&Selection::default(), &fixtures::sample());
        assert_eq!(preview.kind, PreviewKind::Welcome);
        assert_eq!(preview.title, "Welcome to the Common Core Standards Browser");
        assert_eq!(preview.body.len(), 2);
    }

    #[test]
    fn test_grade_summary() {
        let catalog = fixtures::sample();
        let preview = project(&in_k(&catalog), &catalog);

        assert_eq!(preview.kind, PreviewKind::Grade);
        assert_eq!(preview.title, "Kindergarten Mathematics Standards");
        assert_eq!(preview.sections.len(), 1);
        assert_eq!(preview.sections[0].heading, "Domains for Kindergarten:");
        let lines: Vec<_> = preview.sections[0].items.iter().map(PreviewItem::line).collect();
        assert_eq!(
            lines,
            vec![
                "K.CC: Counting and Cardinality",
                "K.OA: Operations and Algebraic Thinking"
            ]
        );
    }

    #[test]
    fn test_domain_without_clusters_has_no_section() {
        let catalog = fixtures::minimal();
        let s = toggle_domain(&in_k(&catalog), &catalog, "CC").unwrap();
        let preview = project(&s, &catalog);

        assert_eq!(preview.kind, PreviewKind::Domain);
        assert_eq!(preview.title, "Counting and Cardinality");
        assert_eq!(preview.code.as_deref(), Some("K.CC"));
        assert!(preview.body.is_empty());
        assert!(preview.sections.is_empty());
        assert!(!preview.to_plain_text().contains("Clusters in this Domain:"));
    }

    #[test]
    fn test_domain_lists_clusters() {
        let catalog = fixtures::sample();
        let s = toggle_domain(&in_k(&catalog), &catalog, "CC").unwrap();
        let preview = project(&s, &catalog);

        assert_eq!(preview.body, vec!["Know number names and the count sequence."]);
        let section = &preview.sections[0];
        assert_eq!(section.heading, "Clusters in this Domain:");
        assert_eq!(section.items[0].code.as_deref(), Some("K.CC.A"));
        assert_eq!(section.items[0].text, None);
        assert_eq!(
            section.items[1].text.as_deref(),
            Some("Understand the relationship between numbers and quantities.")
        );
    }

    #[test]
    fn test_collapsed_domain_still_previewed() {
        let catalog = fixtures::sample();
        let s = toggle_domain(&in_k(&catalog), &catalog, "OA").unwrap();
        let s = toggle_domain(&s, &catalog, "OA").unwrap();
        assert_eq!(project(&s, &catalog).title, "Operations and Algebraic Thinking");
    }

    #[test]
    fn test_cluster_lists_standards() {
        let catalog = fixtures::sample();
        let s = toggle_domain(&in_k(&catalog), &catalog, "CC").unwrap();
        let s = toggle_cluster(&s, &catalog, &ClusterId::new("CC", "A")).unwrap();
        let preview = project(&s, &catalog);

        assert_eq!(preview.kind, PreviewKind::Cluster);
        assert_eq!(preview.code.as_deref(), Some("K.CC.A"));
        let section = &preview.sections[0];
        assert_eq!(section.heading, "Standards in this Cluster:");
        let lines: Vec<_> = section.items.iter().map(PreviewItem::line).collect();
        assert_eq!(lines, vec!["K.CC.1", "K.CC.2: Count forward", "K.CC.3"]);
    }

    #[test]
    fn test_standard_lists_sub_standards() {
        let catalog = fixtures::sample();
        let s = toggle_standard(&in_k(&catalog), &catalog, "K.CC.1").unwrap();
        let preview = project(&s, &catalog);

        assert_eq!(preview.kind, PreviewKind::Standard);
        assert_eq!(preview.title, "K.CC.1");
        assert_eq!(preview.body, vec!["Count to 100 by ones and by tens."]);
        assert_eq!(preview.sections[0].heading, "Sub-standards:");
        assert_eq!(preview.sections[0].items.len(), 2);
    }

    #[test]
    fn test_leaf_standard_uses_name() {
        let catalog = fixtures::sample();
        let s = toggle_standard(&in_k(&catalog), &catalog, "K.CC.2").unwrap();
        let preview = project(&s, &catalog);

        assert_eq!(preview.title, "Count forward");
        assert_eq!(preview.code.as_deref(), Some("K.CC.2"));
        assert!(preview.sections.is_empty());
    }

    #[test]
    fn test_sub_standard_is_deepest() {
        let catalog = fixtures::sample();
        let s = toggle_standard(&in_k(&catalog), &catalog, "K.CC.1").unwrap();
        let s = select_sub_standard(&s, &catalog, "K.CC.1.b").unwrap();
        let preview = project(&s, &catalog);

        assert_eq!(preview.kind, PreviewKind::SubStandard);
        assert_eq!(preview.title, "Tens");
        assert_eq!(preview.code.as_deref(), Some("K.CC.1.b"));
        assert_eq!(preview.body, vec!["Count to 100 by tens."]);
    }

    #[test]
    fn test_empty_text_falls_back() {
        let catalog = Catalog::from_json(
            r#"{"grades": {"K": {"name": "Kindergarten", "domains": {
                "G": {"name": "Geometry", "clusters": {"A": {"name": "Shapes", "standards": {
                    "1": {"code": "K.G.1"}
                }}}}
            }}}}"#,
        )
        .unwrap();
        let s = set_grade(&Selection::default(), &catalog, "K").unwrap();
        let s = toggle_domain(&s, &catalog, "G").unwrap();
        let s = toggle_standard(&s, &catalog, "K.G.1").unwrap();

        // No text on the standard, so the domain is the deepest with content
        assert_eq!(project(&s, &catalog).kind, PreviewKind::Domain);
    }

    #[test]
    fn test_plain_text() {
        let catalog = fixtures::sample();
        let s = toggle_standard(&in_k(&catalog), &catalog, "K.CC.1").unwrap();
        let text = project(&s, &catalog).to_plain_text();

        assert_eq!(
            text,
            "K.CC.1\nK.CC.1\n\nCount to 100 by ones and by tens.\n\nSub-standards:\n  K.CC.1.a\n    Count to 100 by ones.\n  K.CC.1.b\n    Count to 100 by tens.\n"
        );
    }

    #[test]
    fn test_error_preview() {
        let preview = Preview::error("Failed to load standards data.");
        assert_eq!(preview.kind, PreviewKind::Error);
        assert_eq!(
            preview.to_plain_text(),
            "Error\n\nFailed to load standards data.\n"
        );
    }
}
