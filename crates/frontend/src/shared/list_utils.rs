//! List helpers shared by table views (sorting and header indicators)

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Rows that can be sorted by a named column
pub trait Sortable {
    /// Compares two rows by the given field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sorts the list by the given field
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator shown next to a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Sort state after clicking `clicked`: same column flips direction, a new
/// column starts ascending.
pub fn next_sort(current_field: &str, ascending: bool, clicked: &str) -> (String, bool) {
    if current_field == clicked {
        (clicked.to_string(), !ascending)
    } else {
        (clicked.to_string(), true)
    }
}

/// Click handler for a sortable column header
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        let (next_field, next_ascending) =
            next_sort(&sort_field.get_untracked(), sort_ascending.get_untracked(), field);
        sort_field.set(next_field);
        sort_ascending.set(next_ascending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.0.cmp(other.0),
                _ => self.1.cmp(&other.1),
            }
        }
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", 1), Row("a", 3), Row("c", 2)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows, vec![Row("a", 3), Row("b", 1), Row("c", 2)]);
        sort_list(&mut rows, "level", false);
        assert_eq!(rows, vec![Row("a", 3), Row("c", 2), Row("b", 1)]);
    }

    #[test]
    fn test_next_sort() {
        assert_eq!(next_sort("date", false, "date"), ("date".to_string(), true));
        assert_eq!(next_sort("date", false, "winner"), ("winner".to_string(), true));
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("date", "date", true), " ▲");
        assert_eq!(get_sort_indicator("date", "date", false), " ▼");
        assert_eq!(get_sort_indicator("date", "winner", true), " ⇅");
    }
}
