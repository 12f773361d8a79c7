//! SpaceX demo site - client entry point.

use space_x_site::app::App;

fn main() {
    dioxus::launch(App);
}
