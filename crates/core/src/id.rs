//! Id allocation
//!
//! Every collection hands out positive integer ids. Two policies exist:
//! `MaxPlusOne` derives the next id from the current contents, so the id of a
//! deleted highest row is handed out again; `Monotonic` is seeded the same way
//! but only ever moves forward until the store is reset.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How new ids are chosen for a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    Monotonic,
    MaxPlusOne,
}

impl Default for IdPolicy {
    fn default() -> Self {
        Self::Monotonic
    }
}

impl FromStr for IdPolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(Self::Monotonic),
            "max-plus-one" | "max_plus_one" | "max" => Ok(Self::MaxPlusOne),
            other => Err(Error::InvalidInput(format!("Unknown id policy: {}", other))),
        }
    }
}

/// `max(ids) + 1`, or `1` for an empty collection. `None` once the id space
/// is used up.
pub fn next_after(ids: impl IntoIterator<Item = u64>) -> Option<u64> {
    ids.into_iter().max().map_or(Some(1), |max| max.checked_add(1))
}

/// Id source for a single collection
#[derive(Debug, Clone)]
pub struct IdSequence {
    policy: IdPolicy,
    /// `None` when no id is left to hand out
    next: Option<u64>,
}

impl IdSequence {
    /// Create a sequence positioned after the given existing ids
    pub fn seeded(policy: IdPolicy, existing: impl IntoIterator<Item = u64>) -> Self {
        Self {
            policy,
            next: next_after(existing),
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// The id `allocate` would return, without consuming it
    pub fn peek(&self, existing: impl IntoIterator<Item = u64>) -> Result<u64> {
        let derived = next_after(existing);
        let id = match self.policy {
            IdPolicy::MaxPlusOne => derived,
            IdPolicy::Monotonic => self.next.zip(derived).map(|(next, derived)| next.max(derived)),
        };
        id.ok_or_else(|| Error::InvalidInput("id space exhausted".to_string()))
    }

    /// Mark `id` as used
    pub fn advance_past(&mut self, id: u64) {
        let after = id.checked_add(1);
        self.next = self.next.zip(after).map(|(next, after)| next.max(after));
    }

    /// Hand out the next id given the ids currently in the collection
    pub fn allocate(&mut self, existing: impl IntoIterator<Item = u64>) -> Result<u64> {
        let id = self.peek(existing)?;
        self.advance_past(id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_empty_is_one() {
        assert_eq!(next_after(Vec::<u64>::new()), Some(1));
    }

    #[test]
    fn test_next_after_skips_gaps() {
        assert_eq!(next_after(vec![1, 3]), Some(4));
    }

    #[test]
    fn test_max_plus_one_reuses_deleted_max() {
        let mut seq = IdSequence::seeded(IdPolicy::MaxPlusOne, vec![1, 2]);
        assert_eq!(seq.allocate(vec![1, 2]).unwrap(), 3);
        // row 3 deleted again before the next insert
        assert_eq!(seq.allocate(vec![1, 2]).unwrap(), 3);
    }

    #[test]
    fn test_monotonic_never_reuses() {
        let mut seq = IdSequence::seeded(IdPolicy::Monotonic, vec![1, 2]);
        assert_eq!(seq.allocate(vec![1, 2]).unwrap(), 3);
        assert_eq!(seq.allocate(vec![1, 2]).unwrap(), 4);
        assert_eq!(seq.allocate(Vec::<u64>::new()).unwrap(), 5);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut seq = IdSequence::seeded(IdPolicy::Monotonic, vec![4]);
        assert_eq!(seq.peek(vec![4]).unwrap(), 5);
        assert_eq!(seq.peek(vec![4]).unwrap(), 5);
        assert_eq!(seq.allocate(vec![4]).unwrap(), 5);
        assert_eq!(seq.peek(vec![4, 5]).unwrap(), 6);
    }

    #[test]
    fn test_exhausted_id_space_is_an_error() {
        assert_eq!(next_after(vec![u64::MAX]), None);

        for policy in [IdPolicy::Monotonic, IdPolicy::MaxPlusOne] {
            let mut seq = IdSequence::seeded(policy, vec![u64::MAX]);
            assert!(matches!(
                seq.allocate(vec![u64::MAX]),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_last_id_can_be_handed_out_once() {
        let mut seq = IdSequence::seeded(IdPolicy::Monotonic, vec![u64::MAX - 1]);
        assert_eq!(seq.allocate(vec![u64::MAX - 1]).unwrap(), u64::MAX);
        assert!(seq.allocate(Vec::<u64>::new()).is_err());
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!("monotonic".parse::<IdPolicy>().unwrap(), IdPolicy::Monotonic);
        assert_eq!(" Max-Plus-One ".parse::<IdPolicy>().unwrap(), IdPolicy::MaxPlusOne);
        assert!("random".parse::<IdPolicy>().is_err());
    }
}
