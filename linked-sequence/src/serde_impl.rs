//! `serde` support: a sequence serializes as a plain list, front to back.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sequence::LinkedSequence;

/// Upper bound on storage reserved up front from an untrusted length hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for LinkedSequence<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct SequenceVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T: Deserialize<'de>> Visitor<'de> for SequenceVisitor<T> {
    type Value = LinkedSequence<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut seq = LinkedSequence::with_capacity(capacity);
        let mut tail = seq.before_begin();
        while let Some(item) = access.next_element()? {
            tail = seq.insert_after(tail, item);
        }
        Ok(seq)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LinkedSequence<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SequenceVisitor {
            marker: PhantomData,
        })
    }
}
