//! Domain model for actors and their conversations.

mod identity;
mod notification;
mod transcript;

pub use identity::ActorIdentity;
pub use notification::Notification;
pub use transcript::{Transcript, TranscriptId};
