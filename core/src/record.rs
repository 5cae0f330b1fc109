//! JSON share records.
//!
//! A record declares the threshold `k`, an informational share count `n`,
//! and one entry per share keyed by its decimal index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" }
//! }
//! ```
//!
//! `n` and `k` may also sit at the top level instead of under `"keys"`.
//! Every share entry present is read; the index range is not capped. A key
//! that appears twice yields two shares at the same x, which the engine
//! rejects as a duplicate.

use std::fmt;
use std::io::Read;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Result type for record parsing.
pub type RecordResult<T> = Result<T, RecordError>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed share record: {0}")]
    Json(#[from] serde_json::Error),
    #[error("share record has no `{0}` field")]
    MissingField(&'static str),
    #[error("share index {0:?} is not a positive integer")]
    InvalidIndex(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordKeys {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<usize>,
}

/// One share entry as it appears in the record: radix and digits, both as
/// strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedValue {
    pub base: String,
    pub value: String,
}

/// A share entry paired with its index, still undecoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    pub x: u64,
    pub base: String,
    pub value: String,
}

impl EncodedShare {
    pub fn new(
        x: u64,
        base: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            x,
            base: base.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keys: Option<RecordKeys>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    k: Option<usize>,
    #[serde(flatten)]
    entries: ShareEntries,
}

/// Share entries in document order, repeated keys included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ShareEntries(Vec<(String, EncodedValue)>);

impl Serialize for ShareEntries {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (index, entry) in &self.0 {
            map.serialize_entry(index, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ShareEntries {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = ShareEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("share entries keyed by index")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<Self::Value, A::Error> {
                let mut entries =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    entries.push(entry);
                }
                Ok(ShareEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

impl ShareRecord {
    /// A record in the `"keys"` layout, with `n` set to the share count.
    pub fn new(
        threshold: usize,
        shares: impl IntoIterator<Item = EncodedShare>,
    ) -> Self {
        let mut shares: Vec<EncodedShare> = shares.into_iter().collect();
        shares.sort_by_key(|share| share.x);
        let entries: Vec<(String, EncodedValue)> = shares
            .into_iter()
            .map(|share| {
                (
                    share.x.to_string(),
                    EncodedValue {
                        base: share.base,
                        value: share.value,
                    },
                )
            })
            .collect();
        Self {
            keys: Some(RecordKeys {
                n: Some(entries.len()),
                k: Some(threshold),
            }),
            n: None,
            k: None,
            entries: ShareEntries(entries),
        }
    }

    pub fn from_json(json: &str) -> RecordResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> RecordResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_pretty(&self) -> RecordResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The threshold `k`, from `"keys"` or the top level.
    pub fn threshold(&self) -> RecordResult<usize> {
        self.keys
            .as_ref()
            .and_then(|keys| keys.k)
            .or(self.k)
            .ok_or(RecordError::MissingField("k"))
    }

    /// The declared share count `n`, if the record states one.
    pub fn declared_count(&self) -> Option<usize> {
        self.keys.as_ref().and_then(|keys| keys.n).or(self.n)
    }

    /// Number of share entries actually present.
    pub fn len(&self) -> usize {
        self.entries.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.0.is_empty()
    }

    /// All share entries, ordered by index. Entries whose keys name the
    /// same index keep their document order.
    pub fn shares(&self) -> RecordResult<Vec<EncodedShare>> {
        let mut shares = self
            .entries
            .0
            .iter()
            .map(|(index, entry)| {
                let x = parse_index(index)?;
                Ok(EncodedShare::new(x, &entry.base, &entry.value))
            })
            .collect::<RecordResult<Vec<_>>>()?;
        shares.sort_by_key(|share| share.x);
        Ok(shares)
    }
}

fn parse_index(index: &str) -> RecordResult<u64> {
    match index.trim().parse::<u64>() {
        Ok(x) if x > 0 => Ok(x),
        _ => Err(RecordError::InvalidIndex(index.to_string())),
    }
}
