use crate::pages::home::components::{
    actions::ActionButtons, brand::BrandHeader, hero::HeroText,
};
use leptos::*;

#[component]
pub fn WelcomePanel() -> impl IntoView {
    view! {
        <main class="flex min-h-screen flex-col items-center justify-center bg-gradient-to-b from-[#E2F7F3] to-white p-6">
            <BrandHeader/>
            <HeroText/>
            <ActionButtons/>
        </main>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_exactly_one_welcome_heading() {
        let html = render_to_string(|| view! { <WelcomePanel /> });
        assert_eq!(html.matches("Welcome to TwinMart").count(), 1);
    }

    #[test]
    fn renders_two_buttons_labeled_in_order() {
        let html = render_to_string(|| view! { <WelcomePanel /> });
        assert_eq!(html.matches("<button").count(), 2);
        let get_started = html.find("Get Started").expect("Get Started label missing");
        let login = html.find("Login").expect("Login label missing");
        assert!(get_started < login);
    }

    #[test]
    fn repeated_renders_are_identical() {
        let first = render_to_string(|| view! { <WelcomePanel /> });
        let second = render_to_string(|| view! { <WelcomePanel /> });
        assert_eq!(first, second);
    }

    #[test]
    fn renders_tagline_with_offline_callout() {
        let html = render_to_string(|| view! { <WelcomePanel /> });
        assert!(html.contains("Shop smarter, save time, skip the queue"));
        assert!(html.contains("works online"));
        assert!(html.contains("offline"));
    }
}
