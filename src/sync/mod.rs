//! Client-side progress synchronization: the locally animated position, the
//! ticker reconciling it with the server, and drag-seeking.

pub mod controller;
pub mod progress;
pub mod seek;
pub mod sync_loop;
pub mod view;

pub use controller::PlaylistController;
pub use progress::ProgressModel;
pub use seek::{SeekController, TimelineBounds};
pub use sync_loop::{song_changed, SyncLoop, TickOutcome};
pub use view::{LoopState, PlayerFrame, ViewRenderer};
