use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use contracts::domain::a001_fight::Fight;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct LatestFight {
    pub headline: String,
    pub location: String,
    pub date: String,
    pub winner_team: String,
}

/// Summary of the most recent fight, if any.
pub fn latest_fight(fights: &[Fight]) -> Option<LatestFight> {
    Fight::latest(fights).map(|f| LatestFight {
        headline: f.headline(),
        location: f.location_name().to_string(),
        date: format_timestamp(&f.fight_date),
        winner_team: f.winner_team.label().to_string(),
    })
}

/// Content of the "Fight" tab: the latest result and a refresh action.
#[component]
#[allow(non_snake_case)]
pub fn FightSummary(
    #[prop(into)] fights: Signal<Option<Vec<Fight>>>,
    #[prop(into)] loading: Signal<bool>,
    /// Invoked after the user asks for fresh results
    on_fight: Callback<()>,
) -> impl IntoView {
    let latest = Memo::new(move |_| fights.with(|f| f.as_deref().and_then(latest_fight)));

    view! {
        <div class="fight-summary">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">{icon("trophy")}"Latest fight"</h2>
                </div>
                <div class="header__actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        disabled=move || loading.get()
                        on:click=move |_| on_fight.run(())
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>
            {move || match latest.get() {
                Some(fight) => view! {
                    <div class="fight-summary__result">
                        <p class="fight-summary__headline">{fight.headline}</p>
                        <p class="fight-summary__details">
                            {format!("{} won at {} on {}", fight.winner_team, fight.location, fight.date)}
                        </p>
                    </div>
                }.into_any(),
                None => view! {
                    <p class="fight-summary__empty">
                        {move || if loading.get() { "Loading fights..." } else { "No fights yet" }}
                    </p>
                }.into_any(),
            }}
        </div>
    }
}
