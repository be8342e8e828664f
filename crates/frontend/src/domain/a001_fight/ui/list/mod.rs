use crate::shared::date_utils::format_timestamp;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator, sort_list, Sortable};
use chrono::{DateTime, Utc};
use contracts::domain::a001_fight::Fight;
use leptos::prelude::*;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct FightRow {
    pub id: String,
    pub fight_date: DateTime<Utc>,
    pub date: String,
    pub winner: String,
    pub loser: String,
    pub location: String,
}

impl From<&Fight> for FightRow {
    fn from(f: &Fight) -> Self {
        Self {
            id: f.id.clone(),
            fight_date: f.fight_date,
            date: format_timestamp(&f.fight_date),
            winner: f.winner_name.clone(),
            loser: f.loser_name.clone(),
            location: f.location_name().to_string(),
        }
    }
}

impl Sortable for FightRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "winner" => self.winner.to_lowercase().cmp(&other.winner.to_lowercase()),
            "loser" => self.loser.to_lowercase().cmp(&other.loser.to_lowercase()),
            "location" => self
                .location
                .to_lowercase()
                .cmp(&other.location.to_lowercase()),
            _ => self.fight_date.cmp(&other.fight_date),
        }
    }
}

/// Rows ready for the table, sorted by `field`.
pub fn fight_rows(fights: &[Fight], field: &str, ascending: bool) -> Vec<FightRow> {
    let mut rows: Vec<FightRow> = fights.iter().map(FightRow::from).collect();
    sort_list(&mut rows, field, ascending);
    rows
}

/// Fight history table. `None` means the first fetch has not finished yet.
#[component]
#[allow(non_snake_case)]
pub fn FightList(#[prop(into)] fights: Signal<Option<Vec<Fight>>>) -> impl IntoView {
    // newest first
    let sort_field = RwSignal::new("date".to_string());
    let sort_ascending = RwSignal::new(false);

    let rows = Memo::new(move |_| {
        fights.with(|fights| {
            fights
                .as_ref()
                .map(|f| fight_rows(f, &sort_field.get(), sort_ascending.get()))
        })
    });

    let header = move |field: &'static str, title: &'static str| {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=create_sort_toggle(field, sort_field, sort_ascending)
            >
                {title}
                {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
            </th>
        }
    };

    view! {
        <div class="table">
            <table class="table__data table--striped" aria-label="Fight History">
                <thead class="table__head">
                    <tr>
                        {header("date", "Fight Date")}
                        {header("winner", "Winner")}
                        {header("loser", "Loser")}
                        {header("location", "Location")}
                    </tr>
                </thead>
                <tbody>
                    {move || match rows.get() {
                        None => view! {
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan="4">"Loading fights..."</td>
                            </tr>
                        }.into_any(),
                        Some(rows) if rows.is_empty() => view! {
                            <tr class="table__row">
                                <td class="table__cell table__cell--empty" colspan="4">"No fights yet"</td>
                            </tr>
                        }.into_any(),
                        Some(rows) => rows.into_iter().map(|row| view! {
                            <tr class="table__row" data-fight-id=row.id>
                                <td class="table__cell">{row.date}</td>
                                <td class="table__cell">{row.winner}</td>
                                <td class="table__cell">{row.loser}</td>
                                <td class="table__cell">{row.location}</td>
                            </tr>
                        }).collect_view().into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_fight::{FightLocation, Team};

    fn fight(id: &str, date: &str, winner: &str, loser: &str, location: Option<&str>) -> Fight {
        Fight {
            id: id.to_string(),
            fight_date: date.parse().unwrap(),
            winner_name: winner.to_string(),
            winner_level: 10,
            winner_powers: None,
            winner_picture: None,
            loser_name: loser.to_string(),
            loser_level: 5,
            loser_powers: None,
            loser_picture: None,
            winner_team: Team::Heroes,
            loser_team: Team::Villains,
            location: location.map(|name| FightLocation {
                name: name.to_string(),
                ..Default::default()
            }),
        }
    }

    fn sample() -> Vec<Fight> {
        vec![
            fight("1", "2024-03-15T14:02:26Z", "Superman", "Lex Luthor", Some("Metropolis")),
            fight("2", "2024-03-17T08:00:00Z", "batman", "Joker", Some("Gotham")),
            fight("3", "2024-03-16T12:30:00Z", "Wonder Woman", "Ares", None),
        ]
    }

    fn ids(rows: &[FightRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_newest_first_by_default() {
        let rows = fight_rows(&sample(), "date", false);
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
        assert_eq!(rows[2].date, "2024-03-15 14:02:26");
    }

    #[test]
    fn test_sort_by_winner_ignores_case() {
        let rows = fight_rows(&sample(), "winner", true);
        assert_eq!(ids(&rows), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_missing_location_shows_dash() {
        let rows = fight_rows(&sample(), "location", true);
        assert_eq!(rows[0].location, "-");
        assert_eq!(rows[1].location, "Gotham");
    }

    #[test]
    fn test_no_fights() {
        assert!(fight_rows(&[], "date", false).is_empty());
    }
}
