use super::*;
use crate::net::types::Emotion;

fn entry(id: i64, title: &str, content: &str, emotion: &str, created_at: &str) -> JournalEntry {
    JournalEntry {
        id,
        title: Some(title.to_owned()),
        content: content.to_owned(),
        created_at: Some(created_at.to_owned()),
        emotions: vec![
            Emotion { name: emotion.to_owned(), confidence: 0.9 },
            Emotion { name: "Neutral".to_owned(), confidence: 0.05 },
        ],
    }
}

// =============================================================
// Filter
// =============================================================

#[test]
fn all_filter_matches_everything() {
    let e = entry(1, "t", "c", "Joy", "2025-10-01T00:00:00");
    assert!(matches_filter(&e, "All"));
}

#[test]
fn named_filter_matches_dominant_emotion_case_insensitively() {
    let e = entry(1, "t", "c", "joy", "2025-10-01T00:00:00");
    assert!(matches_filter(&e, "Joy"));
    assert!(!matches_filter(&e, "Fear"));
}

#[test]
fn named_filter_ignores_non_dominant_emotions() {
    // "Neutral" is present but not dominant; the filter keys on the top one.
    let e = entry(1, "t", "c", "Joy", "2025-10-01T00:00:00");
    assert!(!matches_filter(&e, "Neutral"));
}

#[test]
fn named_filter_rejects_unanalyzed_entries() {
    let e = JournalEntry {
        id: 1,
        title: None,
        content: "c".to_owned(),
        created_at: None,
        emotions: Vec::new(),
    };
    assert!(!matches_filter(&e, "Joy"));
    assert!(matches_filter(&e, "All"));
}

// =============================================================
// Search
// =============================================================

#[test]
fn blank_search_matches_everything() {
    let e = entry(1, "Morning", "sunrise", "Joy", "2025-10-01T00:00:00");
    assert!(matches_search(&e, ""));
    assert!(matches_search(&e, "   "));
}

#[test]
fn search_matches_title_or_content_case_insensitively() {
    let e = entry(1, "Morning Reflections", "The sun came through", "Joy", "2025-10-01T00:00:00");
    assert!(matches_search(&e, "morning"));
    assert!(matches_search(&e, "SUN"));
    assert!(!matches_search(&e, "thunder"));
}

// =============================================================
// Visible list
// =============================================================

#[test]
fn visible_applies_filter_and_search_together() {
    let state = JournalState {
        items: vec![
            entry(1, "Walk", "park leaves", "Neutral", "2025-10-21T00:00:00"),
            entry(2, "Trip", "park picnic", "Joy", "2025-10-15T00:00:00"),
            entry(3, "Storm", "dark clouds", "Fear", "2025-10-23T00:00:00"),
        ],
        filter: "Joy".to_owned(),
        search: "park".to_owned(),
        ..JournalState::default()
    };
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 2);
}

#[test]
fn visible_sorts_newest_first_with_undated_last() {
    let mut undated = entry(4, "Draft", "c", "Joy", "");
    undated.created_at = None;
    let state = JournalState {
        items: vec![
            entry(1, "Old", "c", "Joy", "2025-10-01T00:00:00"),
            undated,
            entry(2, "New", "c", "Joy", "2025-10-24T00:00:00"),
        ],
        ..JournalState::default()
    };
    let ids: Vec<i64> = state.visible().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1, 4]);
}

#[test]
fn default_filter_is_all_with_empty_search() {
    let state = JournalState::default();
    assert_eq!(state.filter, "All");
    assert!(state.search.is_empty());
    assert!(!state.loading);
}
