//! Job board entry point.

use frontend::app::App;

fn main() {
    dioxus::launch(App);
}
