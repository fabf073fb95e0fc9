use crate::components::{spawn_command, CommandErrorSignal, Icon, PlayerFrameSignal};
use crate::sync::PlaylistController;
use dioxus::prelude::*;

const BUTTON_CLASS: &str =
    "flex items-center justify-center p-2 text-zinc-400 hover:text-white transition-colors";
const ACTIVE_BUTTON_CLASS: &str =
    "flex items-center justify-center p-2 text-emerald-400 hover:text-emerald-300 transition-colors";

#[component]
pub(super) fn PrevButton() -> Element {
    let controller = use_context::<PlaylistController>();
    let errors = use_context::<CommandErrorSignal>();

    rsx! {
        button {
            id: "prev-btn",
            r#type: "button",
            class: BUTTON_CLASS,
            title: "Previous",
            onclick: move |_| {
                let controller = controller.clone();
                spawn_command(errors, "Previous", async move { controller.prev().await });
            },
            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

#[component]
pub(super) fn NextButton() -> Element {
    let controller = use_context::<PlaylistController>();
    let errors = use_context::<CommandErrorSignal>();

    rsx! {
        button {
            id: "next-btn",
            r#type: "button",
            class: BUTTON_CLASS,
            title: "Next",
            onclick: move |_| {
                let controller = controller.clone();
                spawn_command(errors, "Next", async move { controller.next().await });
            },
            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

#[component]
pub(super) fn PlayPauseButton() -> Element {
    let controller = use_context::<PlaylistController>();
    let errors = use_context::<CommandErrorSignal>();
    let frame = use_context::<PlayerFrameSignal>().0;
    let is_playing = frame().is_playing;

    rsx! {
        button {
            id: "play-pause-btn",
            r#type: "button",
            class: "flex h-11 w-11 items-center justify-center rounded-full bg-white text-black hover:scale-105 transition-transform",
            title: if is_playing { "Pause" } else { "Play" },
            onclick: move |_| {
                let controller = controller.clone();
                spawn_command(
                    errors,
                    "Play/pause",
                    async move { controller.toggle_play_pause().await.map(|_| ()) },
                );
            },
            if is_playing {
                Icon { name: "pause".to_string(), class: "w-5 h-5".to_string() }
            } else {
                Icon { name: "play".to_string(), class: "w-5 h-5".to_string() }
            }
        }
    }
}

#[component]
pub(super) fn ShuffleButton() -> Element {
    let controller = use_context::<PlaylistController>();
    let errors = use_context::<CommandErrorSignal>();

    rsx! {
        button {
            id: "shuffle-btn",
            r#type: "button",
            class: BUTTON_CLASS,
            title: "Shuffle playlist",
            onclick: move |_| {
                let controller = controller.clone();
                spawn_command(errors, "Shuffle", async move { controller.shuffle().await });
            },
            Icon { name: "shuffle".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Toggles loop-current. Highlighted while the current song repeats.
#[component]
pub(super) fn LoopButton() -> Element {
    let controller = use_context::<PlaylistController>();
    let errors = use_context::<CommandErrorSignal>();
    let frame = use_context::<PlayerFrameSignal>().0;
    let looping = frame().looping;

    rsx! {
        button {
            id: "loop-btn",
            r#type: "button",
            class: if looping { ACTIVE_BUTTON_CLASS } else { BUTTON_CLASS },
            title: if looping { "Loop current: on" } else { "Loop current: off" },
            onclick: move |_| {
                let controller = controller.clone();
                spawn_command(
                    errors,
                    "Toggle loop",
                    async move { controller.toggle_loop().await.map(|_| ()) },
                );
            },
            Icon { name: "repeat".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}
