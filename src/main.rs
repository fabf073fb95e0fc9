use dioxus::prelude::*;
use rustyremote::components::AppShell;

const APP_CSS: Asset = asset!("/assets/app.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    init_tracing();

    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rustyremote=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "theme-color", content: "#10b981" }
        document::Title { "Playlist" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
