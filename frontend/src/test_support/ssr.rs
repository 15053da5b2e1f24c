use leptos::*;

pub use super::helpers::with_runtime;

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

/// Server-side router source; `<Router/>` needs one outside the browser.
pub fn provide_route(path: &str) {
    provide_context(leptos_router::RouterIntegrationContext::new(
        leptos_router::ServerIntegration {
            path: format!("http://localhost{}", path),
        },
    ));
}
