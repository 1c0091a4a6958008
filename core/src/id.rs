//! Client-side id generation behind an injectable interface.

use crate::task::TaskId;
use uuid::Uuid;

pub trait IdSource {
    fn generate(&self) -> TaskId;
}

/// Production id source: random version-4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn generate(&self) -> TaskId {
        Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let ids = UuidIdSource;
        assert_ne!(ids.generate(), ids.generate());
    }

    #[test]
    fn generated_ids_parse_as_uuids() {
        let id = UuidIdSource.generate();
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
