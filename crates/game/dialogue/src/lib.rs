//! Speech identifiers and the disabled hidden-content shim.
//!
//! `game-dialogue` owns the opaque [`SpeechId`] token that flavor-text
//! triggers pass around, and the stubbed-out hidden-content lookup those
//! triggers still call. The stubs preserve the original entry-point
//! contract (same signatures, always succeed) while doing nothing, so no
//! call site needed to change when the feature was switched off.
pub mod hidden;
pub mod speech;

pub use hidden::{
    DisabledHiddenContent, HiddenContent, init_hidden_content, random_hidden_book_text,
    random_hidden_gossip,
};
pub use speech::SpeechId;
