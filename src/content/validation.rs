//! Content domain: checks that every loaded level is playable.

use std::collections::HashSet;

use super::data::LevelDef;
use crate::level::LevelError;

/// A validation error with the level it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoLevels,
    DuplicateId { level_id: String },
    Level { level_id: String, error: LevelError },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoLevels => write!(f, "no levels defined"),
            ValidationError::DuplicateId { level_id } => {
                write!(f, "level id '{}' is defined more than once", level_id)
            }
            ValidationError::Level { level_id, error } => {
                write!(f, "level '{}': {}", level_id, error)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate every level definition.
/// Returns a list of validation errors, empty if all levels are playable.
pub fn validate_levels(levels: &[LevelDef]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if levels.is_empty() {
        errors.push(ValidationError::NoLevels);
    }

    let mut seen = HashSet::new();
    for level in levels {
        if !seen.insert(level.id.as_str()) {
            errors.push(ValidationError::DuplicateId {
                level_id: level.id.clone(),
            });
        }
        if let Err(error) = level.to_entry() {
            errors.push(ValidationError::Level {
                level_id: level.id.clone(),
                error,
            });
        }
    }

    errors
}
