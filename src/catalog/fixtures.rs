//! Test catalogs shared by the catalog, selection and view tests

use super::Catalog;

/// Two grades; K.CC.1 has sub-standards, K.CC.2 is a leaf, K.CC.3 carries a
/// sub-standard whose code repeats its parent's code.
pub(crate) const SAMPLE: &str = r#"{
  "grades": {
    "K": {
      "name": "Kindergarten",
      "domains": {
        "CC": {
          "name": "Counting & Cardinality",
          "fullName": "Counting and Cardinality",
          "text": "Know number names and the count sequence.",
          "clusters": {
            "A": {
              "name": "Know number names and the count sequence",
              "standards": {
                "1": {
                  "code": "K.CC.1",
                  "text": "Count to 100 by ones and by tens.",
                  "subStandards": {
                    "a": { "code": "K.CC.1.a", "text": "Count to 100 by ones." },
                    "b": { "code": "K.CC.1.b", "name": "Tens", "text": "Count to 100 by tens." }
                  }
                },
                "2": {
                  "code": "K.CC.2",
                  "name": "Count forward",
                  "text": "Count forward beginning from a given number within the known sequence."
                },
                "3": {
                  "code": "K.CC.3",
                  "text": "Write numbers from 0 to 20.",
                  "subStandards": {
                    "a": { "code": "K.CC.3", "text": "Write numbers from 0 to 20 (restated)." }
                  }
                }
              }
            },
            "B": {
              "name": "Count to tell the number of objects",
              "text": "Understand the relationship between numbers and quantities.",
              "standards": {
                "4": {
                  "code": "K.CC.4",
                  "text": "Understand the relationship between numbers and quantities; connect counting to cardinality."
                }
              }
            }
          }
        },
        "OA": {
          "name": "Operations & Algebraic Thinking",
          "fullName": "Operations and Algebraic Thinking",
          "clusters": {
            "A": {
              "name": "Understand addition as putting together and adding to",
              "standards": {
                "1": { "code": "K.OA.1", "text": "Represent addition and subtraction with objects." }
              }
            }
          }
        }
      }
    },
    "1": {
      "name": "Grade 1",
      "domains": {
        "NBT": {
          "name": "Number & Operations in Base Ten",
          "fullName": "Number and Operations in Base Ten",
          "clusters": {
            "A": {
              "name": "Extend the counting sequence",
              "standards": {
                "1": { "code": "1.NBT.1", "text": "Count to 120, starting at any number less than 120." }
              }
            }
          }
        }
      }
    }
  }
}"#;

/// Kindergarten with a single domain that has no clusters
pub(crate) const MINIMAL: &str = r#"{
  "grades": {
    "K": {
      "name": "Kindergarten",
      "domains": {
        "CC": { "name": "Counting & Cardinality", "fullName": "Counting and Cardinality" }
      }
    }
  }
}"#;

pub(crate) fn sample() -> Catalog {
    Catalog::from_json(SAMPLE).expect("sample fixture is valid")
}

pub(crate) fn minimal() -> Catalog {
    Catalog::from_json(MINIMAL).expect("minimal fixture is valid")
}
