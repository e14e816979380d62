//! Packed 64-bit format versions

use serde::{Deserialize, Serialize};
use std::fmt;

/// The game version a record was exported for, packed into a single u64:
/// four 16-bit components (major, minor, patch, build), most significant
/// first. Serialized as the raw integer.
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Version(pub u64);

impl Version {
    /// The version newly constructed planners are stamped with.
    pub const CURRENT: Self = Self::new(1, 1, 61, 0);

    pub const fn new(major: u16, minor: u16, patch: u16, build: u16) -> Self {
        Self(
            ((major as u64) << 48)
                | ((minor as u64) << 32)
                | ((patch as u64) << 16)
                | build as u64,
        )
    }

    /// Create a Version from an already-packed value
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the packed u64 value
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// Unpack into (major, minor, patch, build)
    pub fn parts(&self) -> (u16, u16, u16, u16) {
        (
            (self.0 >> 48) as u16,
            (self.0 >> 32) as u16,
            (self.0 >> 16) as u16,
            self.0 as u16,
        )
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor, patch, build) = self.parts();
        write!(f, "{}.{}.{}.{}", major, minor, patch, build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack() {
        let v = Version::new(1, 1, 61, 0);
        assert_eq!(v.parts(), (1, 1, 61, 0));
        assert_eq!(v, Version::from_raw(v.raw()));
    }

    #[test]
    fn test_component_order() {
        // Most significant first: major occupies the top 16 bits.
        let v = Version::new(1, 0, 0, 0);
        assert_eq!(v.raw(), 1u64 << 48);
        assert!(Version::new(2, 0, 0, 0) > Version::new(1, 65535, 65535, 65535));
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::new(1, 1, 61, 0).to_string(), "1.1.61.0");
    }

    #[test]
    fn test_serde_as_raw_integer() {
        let v = Version::new(0, 17, 0, 0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, v.raw().to_string());
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
