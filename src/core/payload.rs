//! Payload type identity used to reject mismatched topic lookups.

use std::any::{type_name, TypeId};
use std::fmt;

/// Identity token of a topic's payload type, fixed at topic creation.
#[derive(Clone, Copy, Debug)]
pub struct PayloadType {
    id: TypeId,
    name: &'static str,
}

impl PayloadType {
    pub fn of<K: 'static>() -> Self {
        Self {
            id: TypeId::of::<K>(),
            name: type_name::<K>(),
        }
    }

    /// Human-readable type name (for errors and logs only; not unique).
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for PayloadType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PayloadType {}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_by_type() {
        assert_eq!(PayloadType::of::<i32>(), PayloadType::of::<i32>());
        assert_ne!(PayloadType::of::<i32>(), PayloadType::of::<i64>());
        assert_eq!(PayloadType::of::<String>().name(), "alloc::string::String");
    }
}
