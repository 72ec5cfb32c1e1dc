use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A movie genre, identified by its trimmed name.
///
/// `Genre::default()` is the unnamed genre; it orders before every named one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Genre {
    name: Option<String>,
}

impl Genre {
    pub fn try_new(name: &str) -> AppResult<Self> {
        Validator::validate_name("Genre", name)?;
        Ok(Self {
            name: Some(name.trim().to_string()),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name.as_deref().unwrap_or("<unnamed>"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_trimmed() {
        let genre = Genre::try_new("  Sci-Fi ").unwrap();
        assert_eq!(genre.name(), Some("Sci-Fi"));
        assert_eq!(genre, Genre::try_new("Sci-Fi").unwrap());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        assert!(Genre::try_new("").is_err());
        assert!(Genre::try_new("   ").is_err());
    }

    #[test]
    fn test_unnamed_sorts_first() {
        let mut genres = vec![
            Genre::try_new("Drama").unwrap(),
            Genre::default(),
            Genre::try_new("Action").unwrap(),
        ];
        genres.sort();
        assert_eq!(genres[0], Genre::default());
        assert_eq!(genres[1].name(), Some("Action"));
        assert_eq!(genres[2].name(), Some("Drama"));
    }
}
