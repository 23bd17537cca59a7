use flowdemo_core::{
    seed_users, MemoryStore, NewUser, User, UserFields, UserPatch, UserRepository, UserService,
};
use std::collections::HashSet;

fn seeded() -> MemoryStore<User> {
    MemoryStore::with_records("users", seed_users())
}

fn new_user(name: &str, email: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: email.to_string(),
        is_active: true,
    }
}

fn ids(users: &[User]) -> Vec<u64> {
    users.iter().map(|user| user.id).collect()
}

#[test]
fn list_returns_seeded_users_in_order() {
    let store = seeded();
    let users = store.list_users().unwrap();
    assert_eq!(ids(&users), vec![1, 2, 3]);
    assert_eq!(users[0].name, "John Doe");
    assert!(!users[2].is_active);
}

#[test]
fn consecutive_lists_are_equal() {
    let store = seeded();
    assert_eq!(store.list_users().unwrap(), store.list_users().unwrap());
}

#[test]
fn get_by_id_finds_seeded_user() {
    let store = seeded();
    let user = store.get_user(1).unwrap().unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.name, "John Doe");
    assert_eq!(user.email, "john.doe@example.com");
}

#[test]
fn get_by_unknown_id_is_none() {
    let store = seeded();
    assert!(store.get_user(999).unwrap().is_none());
    assert!(store.get_user(0).unwrap().is_none());
}

#[test]
fn create_then_get_roundtrip() {
    let store = seeded();
    let created = store
        .create_user(new_user("Test User", "test@example.com"))
        .unwrap();

    assert_eq!(created.name, "Test User");
    assert_eq!(created.email, "test@example.com");
    assert!(created.is_active);
    assert!(created.created_at > 0);
    assert_eq!(store.get_user(created.id).unwrap(), Some(created));
}

#[test]
fn creates_assign_unique_ids() {
    let store = seeded();
    let first = store.create_user(new_user("User 1", "user1@example.com")).unwrap();
    let second = store.create_user(new_user("User 2", "user2@example.com")).unwrap();
    assert_ne!(first.id, second.id);

    let all: HashSet<u64> = ids(&store.list_users().unwrap()).into_iter().collect();
    assert_eq!(all.len(), 5);
}

#[test]
fn update_merges_fields_and_keeps_identity() {
    let store = seeded();
    let before = store.get_user(1).unwrap().unwrap();
    let updated = store
        .update_user(
            1,
            UserPatch {
                name: Some("Updated Name".to_string()),
                is_active: Some(false),
                ..UserPatch::default()
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, 1);
    assert_eq!(updated.name, "Updated Name");
    assert!(!updated.is_active);
    assert_eq!(updated.email, before.email);
    assert_eq!(updated.created_at, before.created_at);
    assert_eq!(store.get_user(1).unwrap(), Some(updated));
}

#[test]
fn update_unknown_id_is_none_and_store_unchanged() {
    let store = seeded();
    let before = store.list_users().unwrap();
    let patch = UserPatch {
        name: Some("Updated Name".to_string()),
        ..UserPatch::default()
    };
    assert!(store.update_user(999, patch).unwrap().is_none());
    assert_eq!(store.list_users().unwrap(), before);
}

#[test]
fn delete_removes_once() {
    let store = seeded();
    assert!(store.delete_user(1).unwrap());
    assert!(store.get_user(1).unwrap().is_none());
    assert!(!store.delete_user(1).unwrap());
}

#[test]
fn delete_unknown_id_is_false() {
    let store = seeded();
    assert!(!store.delete_user(999).unwrap());
    assert_eq!(store.list_users().unwrap().len(), 3);
}

#[test]
fn create_and_delete_scenario_preserves_relative_order() {
    let store = seeded();
    let created = store
        .create_user(new_user("Dana", "dana@example.com"))
        .unwrap();
    assert_eq!(created.id, 4);

    assert!(store.delete_user(2).unwrap());
    assert_eq!(ids(&store.list_users().unwrap()), vec![1, 3, 4]);
}

#[test]
fn service_create_validates_and_stores() {
    let service = UserService::new(seeded());
    let fields: UserFields = serde_json::from_value(serde_json::json!({
        "name": "Test User",
        "email": "test@example.com",
        "isActive": false
    }))
    .unwrap();

    let created = service.create_user(fields).unwrap();
    assert_eq!(created.id, 4);
    assert!(!created.is_active);
    assert_eq!(service.get_user(4).unwrap(), Some(created));
}
