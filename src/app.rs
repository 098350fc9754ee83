use leptos::*;

use crate::pages::home::HomePage;

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    view! { <HomePage/> }
}
