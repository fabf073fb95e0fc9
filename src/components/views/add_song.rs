use crate::api::SongEntry;
use crate::components::{spawn_command, CommandErrorSignal, Icon, PlayerFrameSignal};
use crate::sync::PlaylistController;
use dioxus::prelude::*;

const INPUT_CLASS: &str = "w-full rounded-lg border border-zinc-700 bg-zinc-900 px-3 py-2 text-sm text-white placeholder:text-zinc-500 focus:border-emerald-500 focus:outline-none";
const SUBMIT_CLASS: &str = "flex items-center justify-center gap-2 rounded-lg bg-emerald-600 px-4 py-2 text-sm font-medium text-white hover:bg-emerald-500 transition-colors disabled:opacity-50";

/// Forms for growing the playlist by hand or from a genre catalog.
#[component]
pub fn AddSongPanel() -> Element {
    let frame = use_context::<PlayerFrameSignal>().0;
    let controller = use_context::<PlaylistController>();
    let errors = use_context::<CommandErrorSignal>();

    let mut title = use_signal(String::new);
    let mut artist = use_signal(String::new);
    let mut genre = use_signal(String::new);
    let mut genre_songs = use_signal(Vec::<SongEntry>::new);
    let browsing = use_signal(|| false);

    let genres = frame().genres;
    let selected_genre = if genre().is_empty() {
        genres.first().cloned().unwrap_or_default()
    } else {
        genre()
    };

    let on_add = {
        let controller = controller.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let controller = controller.clone();
            let new_title = title();
            let new_artist = artist();
            title.set(String::new());
            artist.set(String::new());
            spawn_command(errors, "Add song", async move {
                controller.add(&new_title, &new_artist).await
            });
        }
    };

    let on_add_random = {
        let controller = controller.clone();
        let selected_genre = selected_genre.clone();
        move |_| {
            let controller = controller.clone();
            let genre = selected_genre.clone();
            spawn_command(errors, "Add by genre", async move {
                controller.add_by_genre(&genre, None).await
            });
        }
    };

    let on_browse = {
        let controller = controller.clone();
        let selected_genre = selected_genre.clone();
        move |_| {
            let controller = controller.clone();
            let genre = selected_genre.clone();
            let mut browsing = browsing;
            let mut genre_songs = genre_songs;
            browsing.set(true);
            spawn_command(errors, "Browse genre", async move {
                let result = controller.songs_by_genre(&genre).await;
                browsing.set(false);
                genre_songs.set(result?);
                Ok(())
            });
        }
    };

    rsx! {
        aside { class: "space-y-6",
            form { id: "add-song-form", class: "space-y-3 rounded-2xl border border-zinc-800 bg-zinc-900/40 p-4",
                onsubmit: on_add,
                h2 { class: "text-sm font-semibold uppercase tracking-wide text-zinc-400", "Add song" }
                input {
                    class: INPUT_CLASS,
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                input {
                    class: INPUT_CLASS,
                    placeholder: "Artist",
                    value: "{artist}",
                    oninput: move |evt| artist.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: SUBMIT_CLASS,
                    disabled: title().trim().is_empty(),
                    Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                    "Add"
                }
            }

            if !genres.is_empty() {
                div { class: "space-y-3 rounded-2xl border border-zinc-800 bg-zinc-900/40 p-4",
                    h2 { class: "text-sm font-semibold uppercase tracking-wide text-zinc-400", "Add by genre" }
                    select {
                        class: INPUT_CLASS,
                        value: "{selected_genre}",
                        onchange: move |evt| {
                            genre.set(evt.value());
                            genre_songs.set(Vec::new());
                        },
                        for name in genres.iter() {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                    div { class: "flex gap-2",
                        button { r#type: "button", class: SUBMIT_CLASS, onclick: on_add_random,
                            Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
                            "Random song"
                        }
                        button {
                            r#type: "button",
                            class: "rounded-lg border border-zinc-700 px-4 py-2 text-sm text-zinc-300 hover:text-white hover:border-zinc-500 transition-colors",
                            onclick: on_browse,
                            if browsing() {
                                Icon { name: "loader".to_string(), class: "w-4 h-4".to_string() }
                            } else {
                                "Browse"
                            }
                        }
                    }

                    if !genre_songs().is_empty() {
                        ul { class: "space-y-1",
                            for song in genre_songs() {
                                {
                                    let controller = controller.clone();
                                    let genre = selected_genre.clone();
                                    let pick = song.title.clone();
                                    rsx! {
                                        li {
                                            key: "{song.title}",
                                            class: "flex items-center justify-between gap-2 text-sm",
                                            span { class: "truncate text-zinc-300", "{song.title} · {song.artist}" }
                                            button {
                                                r#type: "button",
                                                class: "p-1 text-zinc-500 hover:text-emerald-400",
                                                title: "Add to playlist",
                                                onclick: move |_| {
                                                    let controller = controller.clone();
                                                    let genre = genre.clone();
                                                    let pick = pick.clone();
                                                    spawn_command(errors, "Add by genre", async move {
                                                        controller.add_by_genre(&genre, Some(&pick)).await
                                                    });
                                                },
                                                Icon { name: "plus".to_string(), class: "w-4 h-4".to_string() }
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
    }
}
