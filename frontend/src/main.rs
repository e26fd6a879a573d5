//! Frontend application entry point.

use university_finder::app::App;

fn main() {
    dioxus::launch(App);
}
