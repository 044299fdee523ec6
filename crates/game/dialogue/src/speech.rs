//! Speech identifier token.

use core::fmt;

/// Opaque identifier for one unit of in-game flavor text.
///
/// The token only references a line; the table that maps ids to text and
/// audio lives with the content data, not here. Code in this crate never
/// looks an id up — it only carries them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeechId(pub u16);

impl SpeechId {
    /// Reserved identifier for "no line": triggers that resolve to `NONE`
    /// display nothing.
    pub const NONE: Self = Self(0);

    /// Returns true if this id is the reserved empty line.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == Self::NONE.0
    }
}

impl Default for SpeechId {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for SpeechId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "speech#{}", self.0)
    }
}
