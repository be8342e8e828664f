use crate::domain::a001_fight::api::fetch_fights;
use crate::shared::api_utils::ApiError;
use contracts::domain::a001_fight::Fight;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const ACTIVE_PARAM: &str = "active";

/// Application-wide state, provided through context.
///
/// The single owner of the active tab: components read `active_tab` and
/// request changes through `set_active_tab`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<String>,
    pub fights: RwSignal<Option<Vec<Fight>>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new(default_tab: &str) -> Self {
        Self {
            active_tab: RwSignal::new(default_tab.to_string()),
            fights: RwSignal::new(None),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    pub fn set_active_tab(&self, id: &str) {
        log::debug!("set_active_tab: '{}'", id);
        self.active_tab.set(id.to_string());
    }

    /// Picks the initial tab from `?active=...` and keeps the URL in sync
    /// with later changes.
    pub fn init_router_integration(&self, known_tabs: &[&str]) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let default_tab = self.active_tab.get_untracked();
        let initial = initial_active_tab(&search, known_tabs, &default_tab);
        if initial != default_tab {
            self.set_active_tab(&initial);
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = active_query(&this.active_tab.get());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Reloads the fight history in the background.
    pub fn refresh_fights(&self) {
        let this = *self;
        this.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_fights().await;
            this.store_fights(result);
        });
    }

    /// Applies the outcome of a fetch. A failed refresh keeps the fights
    /// already shown.
    pub fn store_fights(&self, result: Result<Vec<Fight>, ApiError>) {
        match result {
            Ok(fights) => {
                log::debug!("loaded {} fights", fights.len());
                self.fights.set(Some(fights));
                self.load_error.set(None);
            }
            Err(e) => {
                log::error!("failed to load fights: {}", e);
                self.load_error.set(Some(e.to_string()));
            }
        }
        self.loading.set(false);
    }
}

/// Tab named by the `active` query parameter if it is known, else `default_tab`.
pub fn initial_active_tab(search: &str, known_tabs: &[&str], default_tab: &str) -> String {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get(ACTIVE_PARAM)
        .filter(|id| known_tabs.contains(&id.as_str()))
        .cloned()
        .unwrap_or_else(|| default_tab.to_string())
}

/// Query string that records the active tab, e.g. `?active=history`.
pub fn active_query(active: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(ACTIVE_PARAM, active)])).unwrap_or_default();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    const KNOWN: [&str; 2] = ["fight", "history"];

    #[test]
    fn test_initial_tab_from_query() {
        assert_eq!(initial_active_tab("?active=history", &KNOWN, "fight"), "history");
        assert_eq!(initial_active_tab("?x=1&active=history", &KNOWN, "fight"), "history");
    }

    #[test]
    fn test_initial_tab_falls_back() {
        assert_eq!(initial_active_tab("", &KNOWN, "fight"), "fight");
        assert_eq!(initial_active_tab("?active=villains", &KNOWN, "fight"), "fight");
    }

    #[test]
    fn test_active_query() {
        assert_eq!(active_query("history"), "?active=history");
    }

    #[test]
    fn test_set_active_tab() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new("fight");
            assert_eq!(ctx.active_tab.get_untracked(), "fight");
            ctx.set_active_tab("history");
            assert_eq!(ctx.active_tab.get_untracked(), "history");
        });
    }

    #[test]
    fn test_failed_refresh_keeps_fights() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new("fight");
            ctx.loading.set(true);
            ctx.store_fights(Ok(vec![]));
            assert_eq!(ctx.fights.get_untracked(), Some(vec![]));
            assert!(!ctx.loading.get_untracked());

            ctx.loading.set(true);
            ctx.store_fights(Err(ApiError::Status(500)));
            assert_eq!(ctx.fights.get_untracked(), Some(vec![]));
            assert_eq!(
                ctx.load_error.get_untracked().as_deref(),
                Some("HTTP error: 500")
            );
            assert!(!ctx.loading.get_untracked());
        });
    }
}
