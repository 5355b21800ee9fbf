use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one bridged view instance. Shows up in log fields so events
/// from several views in the same process can be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(String);

impl ViewId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First eight characters, enough to disambiguate in logs.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl Default for ViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_id_is_v4_uuid() {
        let id = ViewId::new();
        let parsed = uuid::Uuid::parse_str(id.as_str());
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn view_ids_are_unique() {
        assert_ne!(ViewId::new(), ViewId::new());
    }

    #[test]
    fn view_id_display_matches_as_str() {
        let id = ViewId::new();
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn view_id_short_is_prefix() {
        let id = ViewId::new();
        assert_eq!(id.short().len(), 8);
        assert!(id.as_str().starts_with(id.short()));
    }

    #[test]
    fn view_id_short_respects_char_boundaries() {
        let id: ViewId = serde_json::from_str("\"ééééééééé\"").unwrap();
        assert_eq!(id.short(), "éééééééé");

        let id: ViewId = serde_json::from_str("\"日本\"").unwrap();
        assert_eq!(id.short(), "日本");
    }

    #[test]
    fn view_id_serialization() {
        let id = ViewId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: ViewId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }
}
