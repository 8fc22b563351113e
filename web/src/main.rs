use dioxus::prelude::*;

use ui::routing::PlatformHistory;

const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Browser history in the client bundle; the server render starts at `/`.
    ui::use_app_state(PlatformHistory::default);

    rsx! {
        document::Title { "Academy" }
        document::Style { "{MAIN_CSS}" }
        ui::Shell {}
    }
}
