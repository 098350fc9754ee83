use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Raised storefront-green button with a hard offset shadow that
    /// collapses while pressed.
    #[default]
    Primary,
    /// Soft white button with a hairline border.
    Secondary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "group relative bg-[#1DB98A] text-white shadow-[0_6px_0_#179a73] active:translate-y-1 active:shadow-[0_2px_0_#179a73] hover:brightness-105",
            ButtonVariant::Secondary => "bg-white text-gray-900 border border-gray-100 shadow-lg shadow-gray-100 hover:bg-gray-50",
        }
    }
}

#[component]
pub fn PillButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button class=move || {
            format!(
                "w-full py-5 rounded-full font-bold text-xl flex items-center justify-center gap-2 transition-all {} {}",
                variant.classes(),
                class
            )
        }>
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn primary_variant_keeps_raised_shadow_classes() {
        let classes = ButtonVariant::Primary.classes();
        assert!(classes.contains("bg-[#1DB98A]"));
        assert!(classes.contains("shadow-[0_6px_0_#179a73]"));
        assert!(classes.contains("active:translate-y-1"));
    }

    #[wasm_bindgen_test]
    fn secondary_variant_stays_white_with_border() {
        let classes = ButtonVariant::Secondary.classes();
        assert!(classes.contains("bg-white"));
        assert!(classes.contains("border-gray-100"));
    }

    #[wasm_bindgen_test]
    fn default_variant_is_primary() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
