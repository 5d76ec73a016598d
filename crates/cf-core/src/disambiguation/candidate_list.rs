use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::EntityId;

/// Ordered snapshot of the candidate entities for one disambiguation turn.
///
/// The task engine builds a fresh list per turn and hands it to the host for
/// rendering. Order is significant: it is the order the host must present
/// the choices in. The list is immutable after construction, so whatever the
/// engine later does to its own working data cannot change what the host was
/// given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<EntityId>", into = "Vec<EntityId>")]
pub struct CandidateList(Vec<EntityId>);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CandidateListError {
    #[error("duplicate entity id in candidate list: {0}")]
    DuplicateEntity(EntityId),
}

impl CandidateList {
    /// Build the candidate list for one turn.
    ///
    /// Ids must be unique within the list. The empty list is valid.
    pub fn new(ids: Vec<EntityId>) -> Result<Self, CandidateListError> {
        let mut seen = HashSet::new();
        for id in &ids {
            if !seen.insert(id.as_str()) {
                return Err(CandidateListError::DuplicateEntity(id.clone()));
            }
        }
        Ok(Self(ids))
    }

    pub fn as_slice(&self) -> &[EntityId] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EntityId> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<EntityId>> for CandidateList {
    type Error = CandidateListError;

    fn try_from(ids: Vec<EntityId>) -> Result<Self, Self::Error> {
        Self::new(ids)
    }
}

impl From<CandidateList> for Vec<EntityId> {
    fn from(list: CandidateList) -> Self {
        list.0
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a EntityId;
    type IntoIter = std::slice::Iter<'a, EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<EntityId> {
        raw.iter().map(|s| EntityId::new(*s)).collect()
    }

    #[test]
    fn preserves_insertion_order() {
        let list = CandidateList::new(ids(&["b", "a", "c"])).unwrap();
        let rendered: Vec<&str> = list.iter().map(|id| id.as_str()).collect();
        assert_eq!(rendered, vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_list_is_valid() {
        let list = CandidateList::new(vec![]).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = CandidateList::new(ids(&["a", "b", "a"])).unwrap_err();
        assert_eq!(err, CandidateListError::DuplicateEntity(EntityId::new("a")));
    }

    #[test]
    fn is_a_snapshot_of_the_source() {
        let mut source = ids(&["id1", "id2", "id3"]);
        let list = CandidateList::new(source.clone()).unwrap();

        source.reverse();
        source.pop();

        let kept: Vec<&str> = list.iter().map(|id| id.as_str()).collect();
        assert_eq!(kept, vec!["id1", "id2", "id3"]);
    }

    #[test]
    fn serde_round_trip_keeps_order() {
        let list = CandidateList::new(ids(&["x", "y"])).unwrap();
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"["x","y"]"#);

        let back: CandidateList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn deserialization_rechecks_uniqueness() {
        let result: Result<CandidateList, _> = serde_json::from_str(r#"["a","a"]"#);
        assert!(result.is_err());
    }
}
