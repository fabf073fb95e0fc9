pub mod error;
pub mod facade;
pub mod in_memory;
pub mod models;
pub mod playlist_server;

pub use error::PlaybackError;
pub use facade::PlaybackFacade;
pub use in_memory::InMemoryPlaylist;
pub use models::*;
pub use playlist_server::PlaylistServerClient;
