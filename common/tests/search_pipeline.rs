//! End-to-end checks of dataset -> debounced query -> filter -> view.

use common::app_const::SEARCH_DEBOUNCE_MS;
use common::dataset::{check_status, loaded_or_absent, parse_dataset};
use common::debounce::{DebounceGate, DebounceTicket};
use common::filter::filter_by_country;
use common::university::University;
use common::view_state::SearchView;
use pretty_assertions::assert_eq;

const DATASET: &str = r#"[
    {"name": "A", "country": "France", "domains": ["a.fr"], "web_pages": ["http://a.fr"]},
    {"name": "B", "country": "Germany", "domains": ["b.de", "b.com"], "web_pages": ["http://b.de"]}
]"#;

fn view(dataset: Option<&[University]>, query: &str) -> SearchView {
    let filtered = filter_by_country(dataset, query).into_iter().cloned().collect();
    SearchView::resolve(query, filtered)
}

fn card_names(view: &SearchView) -> Vec<&str> {
    match view {
        SearchView::Cards(records) => records.iter().map(|r| r.name.as_str()).collect(),
        _ => vec![],
    }
}

#[test]
fn partial_country_shows_single_card() {
    let data = parse_dataset(DATASET).unwrap();
    let v = view(Some(&data), "franc");
    assert_eq!(card_names(&v), vec!["A"]);
}

#[test]
fn unknown_country_shows_message_with_query() {
    let data = parse_dataset(DATASET).unwrap();
    let v = view(Some(&data), "Middle Earth");
    assert_eq!(v, SearchView::NoMatch { query: "Middle Earth".to_string() });
    assert_eq!(
        SearchView::no_record_message("Middle Earth"),
        r#"No university record exists with country name "Middle Earth""#
    );
}

#[test]
fn empty_query_is_prompt_for_any_dataset_size() {
    let mut big = String::from("[");
    for i in 0..500 {
        if i > 0 {
            big.push(',');
        }
        big.push_str(&format!(r#"{{"name": "U{i}", "country": "Chile"}}"#));
    }
    big.push(']');
    let data = parse_dataset(&big).unwrap();
    assert_eq!(data.len(), 500);
    assert_eq!(view(Some(&data), ""), SearchView::Prompt);
    assert_eq!(view(None, ""), SearchView::Prompt);
}

#[test]
fn failed_load_yields_no_match_for_every_query() {
    for query in ["france", "Germany", "x", "Middle Earth"] {
        assert_eq!(view(None, query), SearchView::NoMatch { query: query.to_string() });
    }
}

#[test]
fn server_error_leaves_dataset_absent_and_queries_unmatched() {
    // the body of a 500 is never parsed
    let loaded = loaded_or_absent(check_status(500).and_then(|()| parse_dataset(DATASET)));
    assert_eq!(loaded, None);
    assert_eq!(view(loaded.as_deref(), ""), SearchView::Prompt);
    for query in ["franc", "Germany"] {
        assert_eq!(view(loaded.as_deref(), query), SearchView::NoMatch { query: query.to_string() });
    }
}

#[test]
fn shown_iff_lowered_country_contains_lowered_query() {
    let data = parse_dataset(DATASET).unwrap();
    for query in ["", "f", "FR", "many", "GERM", "e", "z", "ce"] {
        let shown = filter_by_country(Some(&data), query);
        for record in &data {
            let expected = record
                .country
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(&query.to_lowercase()));
            assert_eq!(shown.contains(&record), expected, "query {query:?} record {}", record.name);
        }
    }
}

/// A keystroke at `at_ms` leaving the field with `value`.
struct Keystroke {
    at_ms: u64,
    value: &'static str,
}

/// Replays keystrokes against a gate the way the search input does: every
/// keystroke arms the gate and schedules a timer; a timer commits its value
/// only if its ticket is still current when it fires.
fn replay(keys: &[Keystroke]) -> Vec<&'static str> {
    let delay = u64::from(SEARCH_DEBOUNCE_MS);
    let mut gate = DebounceGate::default();
    let mut timers: Vec<(u64, DebounceTicket, &'static str)> = Vec::new();
    let mut committed = Vec::new();
    let mut key_iter = keys.iter().peekable();

    loop {
        let next_key = key_iter.peek().map(|k| k.at_ms);
        let next_timer = timers.iter().map(|t| t.0).min();
        match (next_key, next_timer) {
            (None, None) => break,
            // a keystroke landing exactly when a timer fires is processed first
            (Some(k), Some(t)) if k <= t => {
                let key = key_iter.next().unwrap();
                timers.push((key.at_ms + delay, gate.arm(), key.value));
            }
            (Some(_), None) => {
                let key = key_iter.next().unwrap();
                timers.push((key.at_ms + delay, gate.arm(), key.value));
            }
            (_, Some(t)) => {
                let pos = timers.iter().position(|timer| timer.0 == t).unwrap();
                let (_, ticket, value) = timers.remove(pos);
                if gate.is_current(ticket) {
                    committed.push(value);
                }
            }
        }
    }
    committed
}

#[test]
fn burst_of_keystrokes_commits_only_the_last() {
    let keys = [
        Keystroke { at_ms: 0, value: "f" },
        Keystroke { at_ms: 80, value: "fr" },
        Keystroke { at_ms: 150, value: "fra" },
        Keystroke { at_ms: 299, value: "fran" },
    ];
    assert_eq!(replay(&keys), vec!["fran"]);
}

#[test]
fn separate_quiet_windows_each_commit() {
    let keys = [
        Keystroke { at_ms: 0, value: "g" },
        Keystroke { at_ms: 100, value: "ge" },
        Keystroke { at_ms: 1000, value: "ger" },
        Keystroke { at_ms: 1500, value: "" },
    ];
    assert_eq!(replay(&keys), vec!["ge", "ger", ""]);
}

#[test]
fn keystroke_on_the_deadline_supersedes_the_pending_value() {
    let keys = [
        Keystroke { at_ms: 0, value: "a" },
        Keystroke { at_ms: 300, value: "ab" },
    ];
    assert_eq!(replay(&keys), vec!["ab"]);
}
