//! Domain layer: election snapshot, phases, announcement flags, chat events.
//!
//! Everything here is plain data plus pure functions; fetching, timers and
//! chat I/O live in the service and adapter layers.

pub mod chat_event;
pub mod election;
pub mod flags;
pub mod phase;

pub use chat_event::{ChatEvent, EventType};
pub use election::{ElectionState, Nominee};
pub use flags::BotFlags;
pub use phase::{Phase, PhaseDates, derive_phase};
