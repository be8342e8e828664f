use crate::domain::a001_fight::ui::list::FightList;
use crate::domain::a001_fight::ui::summary::FightSummary;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{PanelSlot, TabContainer, TabDescriptor};
use crate::shared::icons::icon;
use leptos::prelude::*;

pub const FIGHT_TAB: &str = "fight";
pub const HISTORY_TAB: &str = "history";

pub fn app_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new(FIGHT_TAB, "Fight"),
        TabDescriptor::new(HISTORY_TAB, "Fight History"),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new(FIGHT_TAB);
    provide_context(ctx);

    ctx.init_router_integration(&[FIGHT_TAB, HISTORY_TAB]);
    ctx.refresh_fights();

    let on_tab_change = Callback::new(move |id: String| ctx.set_active_tab(&id));
    let on_fight = Callback::new(move |_: ()| ctx.refresh_fights());

    let fights = ctx.fights;
    let loading = ctx.loading;
    let panels = vec![
        PanelSlot::new(FIGHT_TAB, move || {
            view! { <FightSummary fights=fights loading=loading on_fight=on_fight /> }
        }),
        PanelSlot::new(HISTORY_TAB, move || view! { <FightList fights=fights /> }),
    ];

    view! {
        <h1>"Welcome to Super Heroes Fight!"</h1>

        {move || ctx.load_error.get().map(|e| view! {
            <div class="warning-box" role="alert">
                <span class="warning-box__icon">{icon("warning")}</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}

        <TabContainer
            tabs=app_tabs()
            active_tab=ctx.active_tab
            on_tab_change=on_tab_change
            panels=panels
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::TabStrip;

    #[test]
    fn test_app_tabs() {
        let strip = TabStrip::new(app_tabs());
        let selectors = strip.selectors();
        assert_eq!(selectors.len(), 2);
        assert_eq!(selectors[0].id, FIGHT_TAB);
        assert_eq!(selectors[0].label, "Fight");
        assert_eq!(selectors[1].id, HISTORY_TAB);
        assert_eq!(selectors[1].label, "Fight History");
        assert!(strip.duplicate_ids().is_empty());
    }
}
