mod add_song;
mod queue;

pub use add_song::AddSongPanel;
pub use queue::QueueView;
