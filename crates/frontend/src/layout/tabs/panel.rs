use super::model::{panel_dom_id, tab_dom_id};
use leptos::prelude::*;

/// Content region for one tab.
///
/// Visibility is decided by the parent and passed in as `is_active`. The
/// content is built once and stays in the tree while hidden, so switching
/// tabs never remounts it.
#[component]
#[allow(non_snake_case)]
pub fn TabPanel(
    /// Tab id this panel belongs to
    #[prop(into)]
    tab_id: String,
    /// Computed by the container: `tab_id == active tab`
    #[prop(into)]
    is_active: Signal<bool>,
    /// Accessible name; falls back to the tab id
    #[prop(optional, into)]
    label: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    log::debug!("TabPanel created for '{}'", tab_id);

    let id_for_cleanup = tab_id.clone();
    on_cleanup(move || {
        log::debug!("TabPanel destroyed for '{}'", id_for_cleanup);
    });

    let panel_id = panel_dom_id(&tab_id);
    let labelled_by = tab_dom_id(&tab_id);
    let fallback_label = tab_id.clone();
    let aria_label = move || label.get().unwrap_or_else(|| fallback_label.clone());

    view! {
        <div
            role="tabpanel"
            id=panel_id
            aria-labelledby=labelled_by
            aria-label=aria_label
            hidden=move || !is_active.get()
            class="tab-panel"
            class:tab-panel-active=move || is_active.get()
            data-tab-id=tab_id
        >
            {children()}
        </div>
    }
}
