//! Present-or-absent field wrapper for partial updates

use serde::{Deserialize, Deserializer};

/// A field in a partial update.
///
/// `Absent` means the key was not in the body and the stored value must be
/// left alone. `Set` carries an explicitly supplied value, which for a
/// nullable field may itself be `None`.
///
/// Use with `#[serde(default)]` so missing keys decode to `Absent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// Overwrites `target` if a value was supplied.
    pub fn apply_to(self, target: &mut T) {
        if let Patch::Set(value) = self {
            *target = value;
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}
