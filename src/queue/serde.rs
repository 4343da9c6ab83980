//! Queue serialization as an ordered string sequence
//!
//! A queue serializes to the sequence of its values, head first, and
//! deserializes by rebuilding the chain through tail insertion, so a
//! round trip preserves order exactly.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::StringQueue;

impl Serialize for StringQueue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct QueueVisitor;

impl<'de> Visitor<'de> for QueueVisitor {
    type Value = StringQueue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of strings")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<StringQueue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut queue = StringQueue::new();
        while let Some(value) = seq.next_element::<String>()? {
            queue.insert_tail(&value).map_err(de::Error::custom)?;
        }
        Ok(queue)
    }
}

impl<'de> Deserialize<'de> for StringQueue {
    fn deserialize<D>(deserializer: D) -> Result<StringQueue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(QueueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_in_chain_order() {
        let mut queue = StringQueue::new();
        queue.insert_tail("first").unwrap();
        queue.insert_tail("second").unwrap();
        queue.insert_head("zeroth").unwrap();

        let json = serde_json::to_string(&queue).unwrap();
        assert_eq!(json, r#"["zeroth","first","second"]"#);
    }

    #[test]
    fn test_round_trip() {
        let mut queue = StringQueue::new();
        for value in ["gamma", "alpha", "beta"] {
            queue.insert_tail(value).unwrap();
        }

        let json = serde_json::to_string(&queue).unwrap();
        let restored: StringQueue = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), queue.len());
        assert!(restored.iter().eq(queue.iter()));
        assert_eq!(restored.front(), Some("gamma"));
        assert_eq!(restored.back(), Some("beta"));
    }

    #[test]
    fn test_empty_queue_round_trip() {
        let queue = StringQueue::new();
        let json = serde_json::to_string(&queue).unwrap();
        assert_eq!(json, "[]");

        let restored: StringQueue = serde_json::from_str(&json).unwrap();
        assert!(restored.is_empty());
    }
}
