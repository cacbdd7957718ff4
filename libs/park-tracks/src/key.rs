//! Cache key for extruded track meshes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies every variant of a track type that changes its mesh.
///
/// Packs the track type into the high bits and the cable lift, chain lift
/// and inverted flags into the three low bits. Elements sharing a key share
/// one mesh.
///
/// # Example
///
/// ```rust
/// use park_tracks::PathShapeKey;
///
/// let key = PathShapeKey::new(5, false, true, true);
/// assert_eq!(key.value(), 0b101_011);
/// assert_eq!(key.type_id(), 5);
/// assert!(key.chainlift() && key.inverted() && !key.cablelift());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PathShapeKey(u32);

impl PathShapeKey {
    const INVERTED: u32 = 1;
    const CHAINLIFT: u32 = 1 << 1;
    const CABLELIFT: u32 = 1 << 2;
    const TYPE_SHIFT: u32 = 3;

    /// Packs a track type and its mesh-affecting flags.
    pub fn new(type_id: u16, cablelift: bool, chainlift: bool, inverted: bool) -> Self {
        Self(
            u32::from(type_id) << Self::TYPE_SHIFT
                | u32::from(cablelift) << 2
                | u32::from(chainlift) << 1
                | u32::from(inverted),
        )
    }

    /// The packed value.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Track type id.
    #[inline]
    pub fn type_id(self) -> u16 {
        // At most 16 bits remain after the shift.
        (self.0 >> Self::TYPE_SHIFT) as u16
    }

    /// Whether the track is a cable lift.
    #[inline]
    pub fn cablelift(self) -> bool {
        self.0 & Self::CABLELIFT != 0
    }

    /// Whether the track has a chain lift.
    #[inline]
    pub fn chainlift(self) -> bool {
        self.0 & Self::CHAINLIFT != 0
    }

    /// Whether the track is inverted.
    #[inline]
    pub fn inverted(self) -> bool {
        self.0 & Self::INVERTED != 0
    }
}

impl fmt::Display for PathShapeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}", self.0)
    }
}
