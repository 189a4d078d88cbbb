use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use community_ui::page::{community_name_from_url, CommunityPage};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let name = use_hook(community_name_from_url);

    rsx! {
        CommunityPage { name }
    }
}
