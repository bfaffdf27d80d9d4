use super::*;
use crate::net::types::Interaction;

#[test]
fn only_escape_closes_slide() {
    assert!(closes_slide("Escape"));
    assert!(!closes_slide("Enter"));
    assert!(!closes_slide("escape"));
}

#[test]
fn empty_history_note_for_lead_without_interactions() {
    assert_eq!(empty_history_note(&Lead::new("1", "Person 1")), Some("No history yet"));

    let empty_list = Lead { interactions: Some(Vec::new()), ..Lead::new("2", "Person 2") };
    assert_eq!(empty_history_note(&empty_list), Some("No history yet"));
}

#[test]
fn no_empty_note_when_history_exists() {
    let lead = Lead {
        interactions: Some(vec![Interaction { title: "Invitation Request".to_owned(), ..Interaction::default() }]),
        ..Lead::new("3", "Person 3")
    };
    assert_eq!(empty_history_note(&lead), None);
}
