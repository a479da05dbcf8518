use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Customer classification. Records without a category are `Regular`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Regular,
    Vip,
    Potential,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Regular, Category::Vip, Category::Potential];

    /// Storage key, as persisted and as matched by search.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Regular => "regular",
            Category::Vip => "vip",
            Category::Potential => "potential",
        }
    }

    /// Display label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Regular => "Thường",
            Category::Vip => "VIP",
            Category::Potential => "Tiềm Năng",
        }
    }

    /// Accepts either the key or the display label, ignoring case and
    /// surrounding whitespace. Used for imported data, which may have been
    /// produced by an export that wrote labels.
    pub fn parse_lenient(value: &str) -> Option<Category> {
        let wanted = value.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.key() == wanted || c.label().to_lowercase() == wanted)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Category::Regular),
            "vip" => Ok(Category::Vip),
            "potential" => Ok(Category::Potential),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::Regular.label(), "Thường");
        assert_eq!(Category::Vip.label(), "VIP");
        assert_eq!(Category::Potential.label(), "Tiềm Năng");
    }

    #[test]
    fn test_parse_lenient_accepts_keys_and_labels() {
        assert_eq!(Category::parse_lenient(" VIP "), Some(Category::Vip));
        assert_eq!(Category::parse_lenient("potential"), Some(Category::Potential));
        assert_eq!(Category::parse_lenient("tiềm năng"), Some(Category::Potential));
        assert_eq!(Category::parse_lenient("Thường"), Some(Category::Regular));
        assert_eq!(Category::parse_lenient("gold"), None);
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!("vip".parse::<Category>(), Ok(Category::Vip));
        assert!("VIP".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Category::Potential).unwrap();
        assert_eq!(json, "\"potential\"");
        let parsed: Category = serde_json::from_str("\"vip\"").unwrap();
        assert_eq!(parsed, Category::Vip);
    }
}
