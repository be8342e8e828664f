use super::model::{is_panel_active, is_selected, TabDescriptor, TabStrip};
use super::panel::TabPanel;
use leptos::prelude::*;

/// Panel content registered for one tab id.
#[derive(Clone)]
pub struct PanelSlot {
    pub tab_id: String,
    pub content: ViewFn,
}

impl PanelSlot {
    pub fn new(tab_id: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            tab_id: tab_id.into(),
            content: content.into(),
        }
    }
}

/// Forwards a selector click to the owner of the active tab.
pub(crate) fn activate(on_tab_change: &Callback<String>, tab_id: &str) {
    log::debug!("tab selected: '{}'", tab_id);
    on_tab_change.run(tab_id.to_string());
}

/// Tab strip plus the panels it controls.
///
/// Stateless: the active id is owned by the caller and arrives as a signal,
/// clicks are reported through `on_tab_change`. Panels are matched to tabs
/// by `PanelSlot::tab_id`. Extra `children` are rendered after the panels
/// as they are.
#[component]
#[allow(non_snake_case)]
pub fn TabContainer(
    tabs: Vec<TabDescriptor>,
    #[prop(into)]
    active_tab: Signal<String>,
    on_tab_change: Callback<String>,
    #[prop(optional)]
    panels: Vec<PanelSlot>,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let strip = TabStrip::new(tabs);

    for id in strip.duplicate_ids() {
        log::warn!("TabContainer: duplicate tab id '{}'", id);
    }

    let initial_active = active_tab.get_untracked();
    if !strip.contains(&initial_active) {
        log::warn!("TabContainer: active tab '{}' matches no tab", initial_active);
    }

    let selectors = strip
        .selectors()
        .into_iter()
        .map(|selector| {
            let id_for_aria = selector.id.clone();
            let id_for_class = selector.id.clone();
            let id_for_click = selector.id.clone();
            view! {
                <button
                    type="button"
                    role="tab"
                    id=selector.dom_id
                    aria-controls=selector.controls
                    aria-selected=move || is_selected(&id_for_aria, &active_tab.get()).to_string()
                    class="tab-button"
                    class:tab-active=move || is_selected(&id_for_class, &active_tab.get())
                    on:click=move |_| activate(&on_tab_change, &id_for_click)
                >
                    {selector.label}
                </button>
            }
        })
        .collect_view();

    let panel_views = panels
        .into_iter()
        .map(|slot| {
            let PanelSlot { tab_id, content } = slot;
            let label = strip.label_of(&tab_id).map(str::to_string);
            let id_for_active = tab_id.clone();
            let is_active = Signal::derive(move || is_panel_active(&id_for_active, &active_tab.get()));
            view! {
                <TabPanel tab_id=tab_id is_active=is_active label=label>
                    {content.run()}
                </TabPanel>
            }
        })
        .collect_view();

    view! {
        <div class="tabs-container">
            <div class="tabs-header" role="tablist">
                {selectors}
            </div>
            <div class="tabs-content">
                {panel_views}
                {children.map(|children| children())}
            </div>
        </div>
    }
}
