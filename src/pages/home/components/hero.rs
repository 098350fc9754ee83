use leptos::*;

#[component]
pub fn HeroText() -> impl IntoView {
    view! {
        <div class="text-center max-w-sm mb-16">
            <h2 class="text-4xl font-bold text-gray-900 mb-4">
                "Welcome to TwinMart"
            </h2>
            <p class="text-gray-500 text-lg leading-relaxed">
                "Shop smarter, save time, skip the queue — "
                <span class="text-[#1DB98A] font-semibold block">
                    "works online & offline"
                </span>
            </p>
        </div>
    }
}
