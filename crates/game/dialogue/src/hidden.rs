//! Hidden-content lookup, shipped disabled.
//!
//! NPC gossip triggers and readable props used to ask a recovery subsystem
//! for alternative "hidden" lines before falling back to their own default.
//! That subsystem is turned off; what remains is the call-site contract.
//! Every entry point here always succeeds and always yields the caller's
//! fallback, so trigger code keeps its original shape with no conditional
//! for the disabled feature.
//!
//! Re-enabling the feature means providing another [`HiddenContent`]
//! implementation — the function signatures and the always-succeeds
//! guarantee must not change.

use crate::speech::SpeechId;

/// Source of alternative flavor-text lines.
///
/// The seam between trigger code and whatever selects hidden content.
/// Implementations must be infallible: given a valid fallback id they
/// return a valid id, with the fallback as the worst case.
pub trait HiddenContent {
    /// Picks a gossip line for an NPC, or echoes `fallback`.
    fn gossip(&self, fallback: SpeechId) -> SpeechId;

    /// Picks a text for a readable book prop, or echoes `fallback`.
    fn book_text(&self, fallback: SpeechId) -> SpeechId;
}

/// The shipped implementation: hidden-content lookup is off.
///
/// Both selectors are the identity on their fallback. No randomness, no
/// state, no failure mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisabledHiddenContent;

impl HiddenContent for DisabledHiddenContent {
    #[inline]
    fn gossip(&self, fallback: SpeechId) -> SpeechId {
        fallback
    }

    #[inline]
    fn book_text(&self, fallback: SpeechId) -> SpeechId {
        fallback
    }
}

/// Startup hook for the hidden-content subsystem. Does nothing.
///
/// Kept so initialization-order code need not special-case the disabled
/// feature. Callable at any point, any number of times.
#[inline]
pub fn init_hidden_content() {}

/// Returns a gossip line for an NPC trigger.
///
/// Always exactly `fallback` while the feature is disabled.
#[inline]
pub fn random_hidden_gossip(fallback: SpeechId) -> SpeechId {
    DisabledHiddenContent.gossip(fallback)
}

/// Returns a text for a readable book prop.
///
/// Always exactly `fallback` while the feature is disabled.
#[inline]
pub fn random_hidden_book_text(fallback: SpeechId) -> SpeechId {
    DisabledHiddenContent.book_text(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gossip_echoes_every_fallback() {
        assert_eq!(random_hidden_gossip(SpeechId::NONE), SpeechId::NONE);
        for raw in [0u16, 1, 500, u16::MAX] {
            assert_eq!(random_hidden_gossip(SpeechId(raw)), SpeechId(raw));
        }
    }

    #[test]
    fn book_text_echoes_every_fallback() {
        for raw in [0u16, 3, 1_000, u16::MAX] {
            assert_eq!(random_hidden_book_text(SpeechId(raw)), SpeechId(raw));
        }
    }

    #[test]
    fn init_is_a_repeatable_no_op() {
        // No observable state exists to change; repeated calls must keep
        // the selectors behaving identically.
        init_hidden_content();
        let before = random_hidden_gossip(SpeechId(9));
        init_hidden_content();
        init_hidden_content();
        let after = random_hidden_gossip(SpeechId(9));
        assert_eq!(before, after);
    }

    #[test]
    fn selectors_are_deterministic_across_calls() {
        let id = SpeechId(1_234);
        let picks: Vec<SpeechId> = (0..32).map(|_| random_hidden_gossip(id)).collect();
        assert!(picks.iter().all(|&p| p == id));
    }

    #[test]
    fn trait_object_dispatch_preserves_the_echo() {
        let provider: &dyn HiddenContent = &DisabledHiddenContent;
        assert_eq!(provider.gossip(SpeechId(7)), SpeechId(7));
        assert_eq!(provider.book_text(SpeechId(8)), SpeechId(8));
    }
}
