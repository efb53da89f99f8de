use jobboard_core::{Company, CompanyInput, CompanyStore, SequentialIds};
use std::collections::HashSet;

fn tesla_and_apple() -> CompanyStore {
    CompanyStore::with_records(
        vec![
            Company::with_id("1", "Tesla"),
            Company::with_id("2", "Apple"),
        ],
        Box::new(SequentialIds::new()),
    )
}

#[test]
fn add_assigns_unique_ids_and_appends() {
    let mut store = CompanyStore::new();
    let titles = ["Tesla", "Apple", "Google", "Amazon", "Netflix"];

    for title in titles {
        store.add(CompanyInput::new(title));
    }

    assert_eq!(store.len(), titles.len());
    let ids: HashSet<&str> = store.list().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), titles.len());
    let stored: Vec<&str> = store.list().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(stored, titles);
}

#[test]
fn add_returns_the_stored_record() {
    let mut store = tesla_and_apple();
    let mut input = CompanyInput::new("Google");
    input.website = Some("https://www.google.com".to_string());

    let created = store.add(input);

    assert_eq!(created.id, "3");
    assert_eq!(store.get(&created.id), Some(&created));
    assert_eq!(created.website.as_deref(), Some("https://www.google.com"));
}

#[test]
fn edit_existing_replaces_in_place() {
    let mut store = tesla_and_apple();

    assert!(store.edit(Company::with_id("2", "Apple Inc.")));

    assert_eq!(
        store.list(),
        &[
            Company::with_id("1", "Tesla"),
            Company::with_id("2", "Apple Inc."),
        ]
    );
}

#[test]
fn edit_replaces_the_full_record() {
    let mut store = CompanyStore::new();
    let mut input = CompanyInput::new("Tesla");
    input.description = Some("EVs".to_string());
    let created = store.add(input);

    let replacement = Company::with_id(created.id.clone(), "Tesla");
    store.edit(replacement.clone());

    assert_eq!(store.get(&created.id), Some(&replacement));
    assert_eq!(store.get(&created.id).unwrap().description, None);
}

#[test]
fn edit_missing_id_is_a_noop() {
    let mut store = tesla_and_apple();
    let before = store.list().to_vec();

    assert!(!store.edit(Company::with_id("99", "Ghost")));

    assert_eq!(store.list(), before.as_slice());
}

#[test]
fn delete_existing_removes_one_and_keeps_order() {
    let mut store = tesla_and_apple();
    store.add(CompanyInput::new("Google"));

    assert!(store.delete("2"));

    let ids: Vec<&str> = store.list().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn delete_missing_id_is_a_noop_and_repeat_delete_is_idempotent() {
    let mut store = tesla_and_apple();

    assert!(!store.delete("99"));
    assert_eq!(store.len(), 2);

    assert!(store.delete("1"));
    let after_first = store.list().to_vec();
    assert!(!store.delete("1"));
    assert_eq!(store.list(), after_first.as_slice());
}

#[test]
fn deleted_ids_are_not_reissued_by_sequential_policy() {
    let mut store = CompanyStore::new();
    let first = store.add(CompanyInput::new("Tesla"));
    store.delete(&first.id);

    let second = store.add(CompanyInput::new("Apple"));
    assert_ne!(first.id, second.id);
}
