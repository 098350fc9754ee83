use leptos::*;

/// Runs `f` inside a throwaway reactive runtime.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Renders a view to its SSR markup string so host tests can assert on it.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| {
        // Reset the hydration-id counter so repeated renders are deterministic.
        // leptos' top-level `render_to_string` does this; the `View::render_to_string`
        // method used here does not, so we do it explicitly.
        leptos::leptos_dom::HydrationCtx::reset_id();
        view().into_view().render_to_string().to_string()
    })
}
