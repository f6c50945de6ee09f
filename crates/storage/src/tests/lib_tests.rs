use super::*;

fn seeded() -> TopicStore {
    TopicStore::with_seed([
        ("html", "html is ..."),
        ("css", "css is ..."),
        ("js", "js is ..."),
    ])
    .expect("seed")
}

fn id(raw: u64) -> TopicId {
    TopicId::new(raw).expect("non-zero id")
}

fn titles(store: &TopicStore) -> Vec<String> {
    store.list().iter().map(|topic| topic.title.clone()).collect()
}

#[test]
fn seed_assigns_sequential_ids_from_one() {
    let store = seeded();
    assert_eq!(store.list().ids(), vec![id(1), id(2), id(3)]);
    assert_eq!(store.next_id(), Some(id(4)));
}

#[test]
fn create_appends_and_advances_next_id() {
    let mut store = seeded();
    let topic = store.create("go", "go is ...").expect("create");

    assert_eq!(topic.id, id(4));
    assert_eq!(titles(&store), vec!["html", "css", "js", "go"]);
    assert_eq!(store.find(id(4)).expect("find"), topic);
    assert_eq!(store.next_id(), Some(id(5)));
}

#[test]
fn ids_are_never_reused_after_delete() {
    let mut store = seeded();
    store.delete(id(3)).expect("delete last");
    let created = store.create("rust", "rust is ...").expect("create");
    assert_eq!(created.id, id(4));

    store.delete(id(1)).expect("delete");
    store.delete(id(2)).expect("delete");
    store.delete(id(4)).expect("delete");
    assert!(store.is_empty());

    let mut previous = created.id;
    for n in 0..5 {
        let topic = store.create(format!("t{n}"), "").expect("create");
        assert!(topic.id > previous);
        previous = topic.id;
    }
}

#[test]
fn update_replaces_in_place() {
    let mut store = seeded();
    store.update(id(2), "sass", "sass is ...").expect("update");

    let topic = store.find(id(2)).expect("find");
    assert_eq!(topic.title, "sass");
    assert_eq!(topic.body, "sass is ...");
    assert_eq!(store.list().position(id(2)), Some(1));
    assert_eq!(titles(&store), vec!["html", "sass", "js"]);
}

#[test]
fn update_missing_reports_not_found_and_keeps_state() {
    let mut store = seeded();
    let before = store.list();
    let err = store.update(id(9), "x", "y").expect_err("missing");
    assert_eq!(err, TopicError::NotFound(id(9)));
    assert!(store.list().ptr_eq(&before));
}

#[test]
fn delete_removes_exactly_one_and_preserves_order() {
    let mut store = seeded();
    store.delete(id(2)).expect("delete");
    assert_eq!(store.len(), 2);
    assert_eq!(titles(&store), vec!["html", "js"]);
    assert_eq!(store.first_id(), Some(id(1)));
}

#[test]
fn delete_missing_reports_not_found() {
    let mut store = seeded();
    assert_eq!(store.delete(id(42)), Err(TopicError::NotFound(id(42))));
    assert_eq!(store.len(), 3);
}

#[test]
fn find_missing_reports_not_found() {
    let store = TopicStore::new();
    assert_eq!(store.find(id(1)), Err(TopicError::NotFound(id(1))));
    assert!(!store.contains(id(1)));
    assert_eq!(store.first_id(), None);
}

#[test]
fn old_snapshots_are_not_mutated() {
    let mut store = seeded();
    let before = store.list();

    store.create("go", "go is ...").expect("create");
    store.update(id(1), "HTML", "changed").expect("update");
    store.delete(id(3)).expect("delete");

    assert_eq!(before.len(), 3);
    assert_eq!(before[0].title, "html");
    assert!(before.find(id(3)).is_some());
    assert!(!before.ptr_eq(&store.list()));
}

#[test]
fn list_without_mutation_shares_the_snapshot() {
    let store = seeded();
    assert!(store.list().ptr_eq(&store.list()));
}
