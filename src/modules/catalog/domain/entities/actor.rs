use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A cast member. Identity is the full name; the colleague list does not
/// take part in equality, hashing or ordering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Actor {
    full_name: Option<String>,
    #[serde(default)]
    colleagues: Vec<Actor>,
}

impl Actor {
    pub fn try_new(full_name: &str) -> AppResult<Self> {
        Validator::validate_name("Actor", full_name)?;
        Ok(Self {
            full_name: Some(full_name.trim().to_string()),
            colleagues: Vec::new(),
        })
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn colleagues(&self) -> &[Actor] {
        &self.colleagues
    }

    /// Record that this actor has worked with `colleague`. Returns false if
    /// already recorded.
    pub fn add_colleague(&mut self, colleague: Actor) -> bool {
        if self.colleagues.contains(&colleague) {
            return false;
        }
        self.colleagues.push(colleague);
        true
    }

    pub fn has_worked_with(&self, colleague: &Actor) -> bool {
        self.colleagues.contains(colleague)
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Actor {}

impl Hash for Actor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

impl PartialOrd for Actor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_name.cmp(&other.full_name)
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name.as_deref().unwrap_or("<unknown>"))
    }
}
