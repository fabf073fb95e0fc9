mod controls;

use crate::components::{Icon, PlayerFrameSignal};
use crate::sync::{SeekController, TimelineBounds};
use controls::{LoopButton, NextButton, PlayPauseButton, PrevButton, ShuffleButton};
use dioxus::prelude::*;
use std::rc::Rc;

/// Measure the timeline, then hand the bounds to any press waiting on them.
fn measure_timeline(
    timeline: Signal<Option<Rc<MountedData>>>,
    mut bounds: Signal<Option<TimelineBounds>>,
    seek: SeekController,
) {
    let Some(element) = timeline.peek().clone() else {
        seek.abandon_pending();
        return;
    };
    spawn(async move {
        match element.get_client_rect().await {
            Ok(rect) => {
                let measured = TimelineBounds::new(rect.origin.x, rect.size.width);
                bounds.set(Some(measured));
                seek.resolve_bounds(measured);
            }
            Err(err) => {
                tracing::warn!("Timeline measurement failed: {:?}", err);
                seek.abandon_pending();
            }
        }
    });
}

#[component]
pub fn Player() -> Element {
    let frame = use_context::<PlayerFrameSignal>().0;
    let seek = use_context::<SeekController>();
    let mut timeline = use_signal(|| None::<Rc<MountedData>>);
    let bounds = use_signal(|| None::<TimelineBounds>);

    let snapshot = frame();
    let progress_width = format!("{:.3}%", snapshot.percent.clamp(0.0, 100.0));
    let has_song = !snapshot.current.is_empty();

    // Pointer handlers run synchronously, so the timeline is measured ahead of
    // time: on mount and whenever the pointer enters it.
    let on_mounted = {
        let seek = seek.clone();
        move |evt: MountedEvent| {
            timeline.set(Some(evt.data()));
            measure_timeline(timeline, bounds, seek.clone());
        }
    };

    let on_pointer_enter = {
        let seek = seek.clone();
        move |_: PointerEvent| measure_timeline(timeline, bounds, seek.clone())
    };

    let on_pointer_down = {
        let seek = seek.clone();
        move |evt: PointerEvent| {
            if !has_song {
                return;
            }
            evt.prevent_default();
            let pointer_x = evt.client_coordinates().x;
            match bounds() {
                Some(current_bounds) => seek.begin_seek(pointer_x, current_bounds),
                None => {
                    seek.begin_seek_deferred(pointer_x);
                    measure_timeline(timeline, bounds, seek.clone());
                }
            }
        }
    };

    let on_pointer_move = {
        let seek = seek.clone();
        move |evt: PointerEvent| {
            if seek.is_active() {
                seek.continue_seek(evt.client_coordinates().x);
            }
        }
    };

    let on_pointer_up = {
        let seek = seek.clone();
        move |evt: PointerEvent| seek.end_seek(evt.client_coordinates().x)
    };

    rsx! {
        // While dragging, a full-page layer keeps receiving the pointer so a drag
        // past either end of the bar clamps instead of committing at the edge.
        if snapshot.is_seeking {
            div {
                class: "fixed inset-0 z-50 cursor-grabbing",
                style: "touch-action: none;",
                onpointermove: on_pointer_move.clone(),
                onpointerup: on_pointer_up.clone(),
                onpointercancel: on_pointer_up.clone(),
            }
        }
        footer { class: "player-bar sticky bottom-0 border-t border-zinc-800 bg-zinc-900/95 px-6 py-4 backdrop-blur",
            div { class: "flex flex-col gap-3 max-w-4xl mx-auto",
                div { class: "flex items-center gap-3 min-w-0",
                    Icon { name: "music".to_string(), class: "w-5 h-5 text-zinc-500".to_string() }
                    div { class: "min-w-0",
                        p { id: "now-playing-title", class: "truncate font-medium text-white",
                            "{snapshot.current.title}"
                        }
                        p { class: "truncate text-xs text-zinc-400", "{snapshot.current.artist}" }
                    }
                }

                div { class: "flex items-center gap-3",
                    span { id: "elapsed-time", class: "w-12 text-right text-xs tabular-nums text-zinc-400",
                        "{snapshot.elapsed_label}"
                    }
                    div {
                        id: "progress-container",
                        class: if snapshot.is_seeking { "relative h-2 flex-1 cursor-grabbing rounded-full bg-zinc-700" } else { "relative h-2 flex-1 cursor-pointer rounded-full bg-zinc-700" },
                        style: "touch-action: none;",
                        onmounted: on_mounted,
                        onpointerenter: on_pointer_enter,
                        onpointerdown: on_pointer_down,
                        onpointermove: on_pointer_move,
                        onpointerup: on_pointer_up,
                        div {
                            id: "progress-bar",
                            class: "absolute inset-y-0 left-0 rounded-full bg-emerald-500",
                            style: "width: {progress_width};",
                        }
                    }
                    span { id: "total-time", class: "w-12 text-xs tabular-nums text-zinc-400",
                        "{snapshot.total_label}"
                    }
                }

                div { class: "flex items-center justify-center gap-4",
                    ShuffleButton {}
                    PrevButton {}
                    PlayPauseButton {}
                    NextButton {}
                    LoopButton {}
                }
            }
        }
    }
}
