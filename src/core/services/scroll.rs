use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

/// Sticky scroll: moves a container's viewport to its last child.
pub fn scroll_to_bottom(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        if let Ok(container) = element.dyn_into::<web_sys::HtmlElement>() {
            container.set_scroll_top(container.scroll_height());
        }
    }
}

/// Scrolls after the next paint, and again once entry animations settle.
pub fn scroll_to_bottom_soon(id: &str) {
    let id = id.to_string();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(32).await;
        scroll_to_bottom(&id);
        gloo_timers::future::TimeoutFuture::new(260).await;
        scroll_to_bottom(&id);
    });
}
