//! Wire format of the catalog document
//!
//! Mirrors the JSON exactly (camelCase keys, mappings keyed by id). Mappings
//! are decoded into `Vec<(key, value)>` so document order survives; the typed
//! records in the parent module are built from these.

use super::{Standard, StandardChildren, SubStandard};
use serde::de::{self, Deserializer, MapAccess};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

#[derive(Debug, Deserialize)]
pub(super) struct RawCatalog {
    #[serde(deserialize_with = "ordered")]
    pub grades: Vec<(String, RawGrade)>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawGrade {
    pub name: String,
    #[serde(default, deserialize_with = "ordered")]
    pub domains: Vec<(String, RawDomain)>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawDomain {
    pub name: String,
    pub full_name: Option<String>,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "ordered")]
    pub clusters: Vec<(String, RawCluster)>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawCluster {
    pub name: String,
    pub text: Option<String>,
    #[serde(default, deserialize_with = "ordered")]
    pub standards: Vec<(String, RawStandard)>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawStandard {
    pub code: String,
    pub name: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "ordered")]
    pub sub_standards: Vec<(String, RawSubStandard)>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawSubStandard {
    pub code: String,
    pub name: Option<String>,
    #[serde(default)]
    pub text: String,
}

impl RawStandard {
    pub(super) fn into_standard(self, key: String) -> Standard {
        let children = if self.sub_standards.is_empty() {
            StandardChildren::Leaf
        } else {
            StandardChildren::SubStandards(
                self.sub_standards
                    .into_iter()
                    .map(|(key, sub)| SubStandard {
                        key,
                        code: sub.code,
                        name: sub.name,
                        text: sub.text,
                    })
                    .collect(),
            )
        };

        Standard {
            key,
            code: self.code,
            name: self.name,
            text: self.text,
            children,
        }
    }
}

/// Decode a JSON object into its entries, in document order
///
/// `null` decodes as an empty list, matching an absent key. Keys are unique
/// in the result.
fn ordered<'de, D, T>(deserializer: D) -> Result<Vec<(String, T)>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> de::Visitor<'de> for OrderedVisitor<T> {
        type Value = Vec<(String, T)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping keyed by id")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, T>()? {
                // A repeated key keeps its first position and its last value
                match entries.iter_mut().find(|(k, _): &&mut (String, T)| *k == key) {
                    Some((_, slot)) => *slot = value,
                    None => entries.push((key, value)),
                }
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_any(OrderedVisitor(PhantomData))
}
