use crate::components::{
    common::{ButtonVariant, PillButton},
    icons::LoginIcon,
};
use leptos::*;

// Neither button is wired to a handler: the navigation flow behind them is
// not defined.
#[component]
pub fn ActionButtons() -> impl IntoView {
    view! {
        <div class="w-full max-w-[400px] space-y-5">
            <PillButton variant=ButtonVariant::Primary>
                "Get Started"
                <span class="text-2xl">"→"</span>
            </PillButton>
            <PillButton variant=ButtonVariant::Secondary>
                <LoginIcon/>
                "Login"
            </PillButton>
        </div>
    }
}
