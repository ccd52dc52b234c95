//! Contract tests for the in-memory task repository.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{Task, TaskId, TaskStatus, TaskTitle},
    ports::TaskRepository,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn task(title: &str) -> Task {
    Task::new(
        TaskTitle::new(title).expect("valid title"),
        None,
        &DefaultClock,
    )
}

#[rstest]
fn store_returns_the_stored_task(repository: InMemoryTaskRepository) {
    let created = task("Stored");
    let stored = repository.store(&created).expect("store succeeds");

    assert_eq!(stored, created);
    assert_eq!(
        repository.find_by_id(created.id()).expect("lookup succeeds"),
        Some(created)
    );
}

#[rstest]
fn store_silently_overwrites_an_existing_identifier(repository: InMemoryTaskRepository) {
    let created = task("Original");
    repository.store(&created).expect("store succeeds");

    let mut replacement = created.clone();
    replacement.mark_complete(&DefaultClock);
    repository.store(&replacement).expect("overwrite succeeds");

    let listed = repository.list().expect("list succeeds");
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed.first().map(Task::status),
        Some(TaskStatus::Complete)
    );
}

#[rstest]
fn list_preserves_insertion_order(repository: InMemoryTaskRepository) {
    let first = task("first");
    let second = task("second");
    let third = task("third");
    for stored in [&first, &second, &third] {
        repository.store(stored).expect("store succeeds");
    }

    let listed = repository.list().expect("list succeeds");
    let ids: Vec<TaskId> = listed.iter().map(Task::id).collect();
    assert_eq!(ids, vec![first.id(), second.id(), third.id()]);
}

#[rstest]
fn list_on_an_empty_store_yields_an_empty_vec(repository: InMemoryTaskRepository) {
    assert_eq!(repository.list().expect("list succeeds"), Vec::new());
}

#[rstest]
fn find_by_id_returns_none_for_unknown_identifiers(repository: InMemoryTaskRepository) {
    assert_eq!(
        repository.find_by_id(TaskId::new()).expect("lookup succeeds"),
        None
    );
}

#[rstest]
fn update_replaces_an_existing_task(repository: InMemoryTaskRepository) {
    let created = task("Before");
    repository.store(&created).expect("store succeeds");

    let mut changed = created.clone();
    changed.rename(
        TaskTitle::new("After").expect("valid title"),
        &DefaultClock,
    );
    let updated = repository.update(&changed).expect("update succeeds");

    assert_eq!(updated, Some(changed.clone()));
    assert_eq!(
        repository.find_by_id(created.id()).expect("lookup succeeds"),
        Some(changed)
    );
}

#[rstest]
fn update_of_a_missing_task_is_a_pure_no_op(repository: InMemoryTaskRepository) {
    repository.store(&task("Bystander")).expect("store succeeds");

    let orphan = task("Orphan");
    let updated = repository.update(&orphan).expect("update succeeds");

    assert_eq!(updated, None);
    assert_eq!(repository.list().expect("list succeeds").len(), 1);
}

#[rstest]
fn delete_removes_exactly_the_targeted_task(repository: InMemoryTaskRepository) {
    let doomed = task("Doomed");
    let survivor = task("Survivor");
    repository.store(&doomed).expect("store succeeds");
    repository.store(&survivor).expect("store succeeds");

    assert!(repository.delete(doomed.id()).expect("delete succeeds"));

    let listed = repository.list().expect("list succeeds");
    assert_eq!(listed, vec![survivor]);
}

#[rstest]
fn delete_of_a_missing_task_reports_failure(repository: InMemoryTaskRepository) {
    repository.store(&task("Bystander")).expect("store succeeds");

    assert!(!repository.delete(TaskId::new()).expect("delete succeeds"));
    assert_eq!(repository.list().expect("list succeeds").len(), 1);
}
