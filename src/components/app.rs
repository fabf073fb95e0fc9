use crate::api::{InMemoryPlaylist, PlaybackFacade, PlaylistServerClient};
use crate::components::views::{AddSongPanel, QueueView};
use crate::components::{
    CommandErrorSignal, DioxusSpawner, Icon, Player, PlayerFrameSignal, SignalRenderer,
};
use crate::config::{PlayerSettings, SyncConfig};
use crate::sync::{PlayerFrame, PlaylistController, ProgressModel, SeekController, SyncLoop};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

fn build_facade(settings: &PlayerSettings) -> Rc<dyn PlaybackFacade> {
    match settings.server_url.as_deref() {
        Some(url) if !url.trim().is_empty() => {
            info!("Using playlist server at {}", url);
            Rc::new(PlaylistServerClient::new(url))
        }
        _ => {
            info!("No playlist server configured, using the in-memory demo playlist");
            Rc::new(InMemoryPlaylist::with_demo_songs())
        }
    }
}

fn build_sync_loop(settings: &PlayerSettings, frame: Signal<PlayerFrame>) -> SyncLoop {
    let config = SyncConfig::from(settings);
    let model = Rc::new(RefCell::new(ProgressModel::new(config.default_duration)));
    SyncLoop::new(
        model,
        build_facade(settings),
        Rc::new(SignalRenderer::new(frame)),
        Rc::new(DioxusSpawner),
        config,
    )
}

#[component]
pub fn AppShell() -> Element {
    let frame = use_signal(PlayerFrame::default);
    let mut command_error = use_signal(|| None::<String>);
    let settings = use_hook(PlayerSettings::load);

    let sync = use_hook(|| build_sync_loop(&settings, frame));
    let controller = use_hook(|| PlaylistController::new(sync.clone()));
    let seek = use_hook(|| SeekController::new(sync.clone()));

    use_context_provider(|| PlayerFrameSignal(frame));
    use_context_provider(|| CommandErrorSignal(command_error));
    use_context_provider(|| controller.clone());
    use_context_provider(|| seek.clone());

    {
        let controller = controller.clone();
        use_effect(move || {
            let controller = controller.clone();
            let mut command_error = command_error;
            spawn(async move {
                if let Err(err) = controller.refresh().await {
                    tracing::warn!("Initial refresh failed: {}", err);
                    command_error.set(Some(err.to_string()));
                }
            });
        });
    }

    {
        let sync = sync.clone();
        use_drop(move || sync.stop());
    }

    let current = frame().current;

    rsx! {
        div { class: "min-h-screen bg-zinc-950 text-zinc-100 flex flex-col",
            header { class: "page-header px-6 pt-6",
                div { class: "flex items-center gap-3",
                    Icon { name: "music".to_string(), class: "w-7 h-7 text-emerald-400".to_string() }
                    h1 { class: "page-title", "Playlist" }
                }
                p { class: "page-subtitle",
                    if current.is_empty() {
                        "Nothing selected"
                    } else {
                        "Now playing: {current.title} by {current.artist}"
                    }
                }
            }

            if let Some(message) = command_error() {
                div {
                    class: "error-banner mx-6 mt-4 flex items-center justify-between gap-3 rounded-xl border border-red-500/40 bg-red-500/10 px-4 py-3 text-sm text-red-200",
                    role: "alert",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "text-red-200 hover:text-white",
                        onclick: move |_| command_error.set(None),
                        Icon { name: "x".to_string(), class: "w-4 h-4".to_string() }
                    }
                }
            }

            main { class: "flex-1 grid gap-6 p-6 lg:grid-cols-[2fr_1fr]",
                QueueView {}
                AddSongPanel {}
            }

            Player {}
        }
    }
}
