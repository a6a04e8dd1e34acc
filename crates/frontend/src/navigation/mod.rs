//! Navigation context: the one place declarative links and imperative
//! navigate calls converge before touching the history API. Every target
//! passes through the guard exactly once (double-normalization is
//! idempotent, so accidental re-wrapping is harmless).

use crate::routes::guard;
use crate::routes::{normalize_navigation_target, Routes};
use leptos::children::Children;
use leptos::prelude::Effect;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct NavigationContext {
    pub current: RwSignal<String>,
    routes: StoredValue<Routes>,
}

impl NavigationContext {
    pub fn new(routes: Routes) -> Self {
        Self {
            current: RwSignal::new("/".to_string()),
            routes: StoredValue::new(routes),
        }
    }

    pub fn routes(&self) -> Routes {
        self.routes.get_value()
    }

    /// Adopt the browser's current path and keep the address bar in sync
    /// with in-app navigation. Runs once when the shell mounts.
    pub fn init_router_integration(&self) {
        let initial = window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string());
        self.current.set(normalize_navigation_target(&initial).path);

        let this = *self;
        Effect::new(move |_| {
            let path = this.current.get();
            let browser_path = window()
                .and_then(|w| w.location().pathname().ok())
                .unwrap_or_default();
            if browser_path != path {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.push_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&path),
                        );
                    }
                }
            }
        });
    }

    /// Navigate to any target string. In-app targets update the current
    /// path; external schemes hand over to the browser.
    pub fn navigate(&self, target: &str) {
        let normalized = normalize_navigation_target(target);
        if guard::is_external(&normalized.path) {
            if let Some(w) = window() {
                let _ = w.location().set_href(&normalized.path);
            }
            return;
        }
        self.current.set(normalized.path);
    }
}

pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>().expect("NavigationContext not found")
}

/// Imperative navigation hook.
pub fn use_app_navigate() -> impl Fn(&str) + Copy {
    let ctx = use_navigation();
    move |target: &str| ctx.navigate(target)
}

/// Safe link wrapper that enforces absolute paths. In-app targets route
/// through the navigation context; external targets render as plain
/// anchors.
#[component]
#[allow(non_snake_case)]
pub fn AppLink(
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_navigation();
    let target = normalize_navigation_target(&to);
    let external = guard::is_external(&target.path);
    let href = target.path.clone();
    let path = target.path;

    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                if !external {
                    ev.prevent_default();
                    ctx.navigate(&path);
                }
            }
        >
            {children()}
        </a>
    }
}
