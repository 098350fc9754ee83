use leptos::*;

pub mod components;

mod panel;

pub use panel::WelcomePanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! { <WelcomePanel /> }
}
