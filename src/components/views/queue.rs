use crate::components::{spawn_command, CommandErrorSignal, Icon, PlayerFrameSignal};
use crate::sync::PlaylistController;
use dioxus::prelude::*;

#[component]
pub fn QueueView() -> Element {
    let frame = use_context::<PlayerFrameSignal>().0;
    let controller = use_context::<PlaylistController>();
    let errors = use_context::<CommandErrorSignal>();
    let drag_source_index = use_signal(|| None::<usize>);

    let snapshot = frame();
    let songs = snapshot.songs.clone();
    let current_title = snapshot.current.title.clone();
    let is_playing = snapshot.is_playing;

    rsx! {
        section { class: "space-y-4",
            header { class: "page-header page-header--split",
                div {
                    h2 { class: "page-title text-xl", "Playlist" }
                    p { class: "page-subtitle", "{songs.len()} songs" }
                }
            }

            if songs.is_empty() {
                div { class: "flex flex-col items-center justify-center py-20",
                    Icon {
                        name: "queue".to_string(),
                        class: "w-16 h-16 text-zinc-600 mb-4".to_string(),
                    }
                    p { class: "text-zinc-400", "The playlist is empty" }
                    p { class: "text-zinc-500 text-sm mt-2", "Add a song or pick one from a genre" }
                }
            } else {
                ul { id: "playlist", class: "space-y-2",
                    for (index , song) in songs.into_iter().enumerate() {
                        {
                            let is_current = song.title == current_title;
                            let row_class = if is_current {
                                "flex items-center gap-3 p-3 rounded-lg bg-emerald-500/10 border border-emerald-500/40 select-none"
                            } else {
                                "flex items-center gap-3 p-3 rounded-lg bg-zinc-900/60 border border-zinc-800 hover:border-zinc-700 select-none"
                            };
                            let select_title = song.title.clone();
                            let delete_title = song.title.clone();
                            rsx! {
                                li {
                                    key: "{song.title}:{index}",
                                    draggable: true,
                                    class: "{row_class}",
                                    ondragstart: {
                                        let mut drag_source_index = drag_source_index;
                                        move |_| drag_source_index.set(Some(index))
                                    },
                                    ondragend: {
                                        let mut drag_source_index = drag_source_index;
                                        move |_| drag_source_index.set(None)
                                    },
                                    ondragover: move |evt| evt.prevent_default(),
                                    ondrop: {
                                        let mut drag_source_index = drag_source_index;
                                        let controller = controller.clone();
                                        move |evt| {
                                            evt.prevent_default();
                                            let Some(source_index) = drag_source_index() else {
                                                return;
                                            };
                                            drag_source_index.set(None);
                                            let controller = controller.clone();
                                            spawn_command(errors, "Reorder", async move {
                                                controller.move_song(source_index, index).await
                                            });
                                        }
                                    },
                                    span { class: "text-zinc-600 cursor-grab", title: "Drag to reorder",
                                        Icon { name: "queue".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                    button {
                                        r#type: "button",
                                        class: "flex-1 min-w-0 text-left",
                                        onclick: {
                                            let controller = controller.clone();
                                            move |_| {
                                                let controller = controller.clone();
                                                let title = select_title.clone();
                                                spawn_command(errors, "Select", async move {
                                                    controller.select(&title).await
                                                });
                                            }
                                        },
                                        p { class: if is_current { "truncate font-medium text-emerald-300" } else { "truncate font-medium text-white" },
                                            "{song.title}"
                                        }
                                        p { class: "truncate text-xs text-zinc-400", "{song.artist}" }
                                    }
                                    if is_current && is_playing {
                                        Icon { name: "play".to_string(), class: "w-4 h-4 text-emerald-400".to_string() }
                                    }
                                    button {
                                        r#type: "button",
                                        class: "p-2 text-zinc-500 hover:text-red-400 transition-colors",
                                        title: "Remove from playlist",
                                        onclick: {
                                            let controller = controller.clone();
                                            move |evt: MouseEvent| {
                                                evt.stop_propagation();
                                                let controller = controller.clone();
                                                let title = delete_title.clone();
                                                spawn_command(errors, "Delete", async move {
                                                    controller.delete(&title).await
                                                });
                                            }
                                        },
                                        Icon { name: "trash".to_string(), class: "w-4 h-4".to_string() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
