//! Id Assignment

use std::fmt::Debug;
use uuid::Uuid;

/// Source of ids for resources converted without one
pub trait IdGenerator: Send + Sync + Debug {
    /// Produce a new, non-empty id
    fn generate(&self) -> String;
}

/// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Use the supplied id when it is non-empty, otherwise generate one
pub fn assign_id(supplied_id: Option<&str>, generator: &dyn IdGenerator) -> String {
    match supplied_id {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => generator.generate(),
    }
}
