use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::scoring::aggregate::aggregate;

/// Upstream candidate identifier.
///
/// The people API is not consistent about sending ids as numbers or strings,
/// so both normalise to the same canonical string. Two ids are the same
/// candidate iff their canonical forms are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u64> for CandidateId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for CandidateId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// One roster entry from `GET /people`. Fields other than `id` and `name`
/// are carried through, minus the keys the service computes itself.
///
/// A missing or `null` name decodes as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonSummary {
    pub id: CandidateId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PersonSummary {
    /// Name for messages and labels; the id when the name is blank.
    pub fn label(&self) -> String {
        if self.name.trim().is_empty() {
            self.id.to_string()
        } else {
            self.name.clone()
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keys written by the service next to the roster fields. Upstream fields
/// with these names are dropped so the computed value is the only one.
pub const COMPUTED_KEYS: [&str; 4] = ["total_score", "rank", "selected", "recommended"];

/// A fully loaded candidate: roster summary, raw detail payload and the
/// aggregate score derived from it.
///
/// Constructed only through [`Candidate::new`], which computes the score
/// once; there are no mutators.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    #[serde(flatten)]
    summary: PersonSummary,
    #[serde(skip)]
    detail: Value,
    total_score: f64,
}

impl Candidate {
    pub fn new(mut summary: PersonSummary, detail: Value) -> Self {
        for key in COMPUTED_KEYS {
            summary.extra.remove(key);
        }
        let total_score = aggregate(&detail);
        Self {
            summary,
            detail,
            total_score,
        }
    }

    pub fn id(&self) -> &CandidateId {
        &self.summary.id
    }

    pub fn name(&self) -> &str {
        &self.summary.name
    }

    pub fn detail(&self) -> &Value {
        &self.detail
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }
}
