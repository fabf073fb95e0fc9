//! Dioxus view layer. Components read the latest [`PlayerFrame`] from context and
//! send commands through [`PlaylistController`].
//!
//! [`PlayerFrame`]: crate::sync::PlayerFrame
//! [`PlaylistController`]: crate::sync::PlaylistController

mod app;
mod icons;
mod player;
mod sync_bridge;
pub mod views;

pub use app::*;
pub use icons::*;
pub use player::*;
pub use sync_bridge::*;

use crate::api::PlaybackError;
use dioxus::prelude::*;
use std::future::Future;

/// Run a controller command in the background and surface its failure in the
/// error banner. A success clears any previous message.
pub fn spawn_command<F>(errors: CommandErrorSignal, label: &'static str, command: F)
where
    F: Future<Output = Result<(), PlaybackError>> + 'static,
{
    let mut errors = errors.0;
    spawn(async move {
        match command.await {
            Ok(()) => errors.set(None),
            Err(err) => {
                tracing::warn!("{} failed: {}", label, err);
                errors.set(Some(err.to_string()));
            }
        }
    });
}
