//! Typing test core: paragraph selection, scoring, autocorrect and race
//! timing. Everything here is synchronous and free of I/O.

pub mod autocorrect;
pub mod distance;
pub mod error;
pub mod fsm;
pub mod normalize;
pub mod passages;
pub mod protocol;
pub mod race;
pub mod score;

pub use error::{Error, Result};
