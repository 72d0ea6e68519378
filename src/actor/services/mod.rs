//! Application services for actors.

mod handle;

pub use handle::ActorHandle;
