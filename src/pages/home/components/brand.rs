use crate::components::icons::CartIcon;
use leptos::*;

#[component]
pub fn BrandHeader() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-20">
            <div class="bg-[#1DB98A] p-2.5 rounded-2xl shadow-sm">
                <CartIcon/>
            </div>
            <h1 class="text-4xl font-bold tracking-tight text-gray-900">
                "Twin"
                <span class="text-[#1DB98A]">"Mart"</span>
            </h1>
        </div>
    }
}
