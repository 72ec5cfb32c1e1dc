use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A movie's director. Equality, hashing and ordering use the full name only;
/// the unnamed director (`Director::default()`) orders first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Director {
    full_name: Option<String>,
}

impl Director {
    pub fn try_new(full_name: &str) -> AppResult<Self> {
        Validator::validate_name("Director", full_name)?;
        Ok(Self {
            full_name: Some(full_name.trim().to_string()),
        })
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn is_named(&self) -> bool {
        self.full_name.is_some()
    }
}

impl std::fmt::Display for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name.as_deref().unwrap_or("<unknown>"))
    }
}
