use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque identifier for one candidate entity within a disambiguation round.
///
/// The task engine assigns these; the library never inspects their format.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for EntityId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_creation() {
        let id = EntityId::new("item-42");
        assert_eq!(id.as_str(), "item-42");
    }

    #[test]
    fn test_entity_id_from_str() {
        let id: EntityId = "item-42".into();
        assert_eq!(id.as_str(), "item-42");
    }

    #[test]
    fn test_entity_id_display() {
        let id = EntityId::new("item-42");
        assert_eq!(id.to_string(), "item-42");
    }
}
