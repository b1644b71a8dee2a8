use roster_core::{
    Course, InMemoryRosterRepository, NewStudent, RepoError, RosterRepository, RosterService,
    StudentPatch,
};
use std::collections::HashSet;
use uuid::Uuid;

fn new_student(name: &str, course: Course) -> NewStudent {
    NewStudent {
        name: name.to_string(),
        email: format!("{}@school.edu", name.to_lowercase().replace(' ', ".")),
        age: 20,
        course,
        enrollment_date: "2024-03-01".to_string(),
    }
}

#[test]
fn create_assigns_pairwise_distinct_ids() {
    let mut repo = InMemoryRosterRepository::new();
    for index in 0..50 {
        repo.create(new_student(&format!("Student {index}"), Course::Biology));
    }

    let ids: HashSet<_> = repo.list().into_iter().map(|student| student.id).collect();
    assert_eq!(ids.len(), 50);
    assert_eq!(repo.len(), 50);
}

#[test]
fn create_then_get_roundtrip() {
    let mut repo = InMemoryRosterRepository::new();
    let data = new_student("Ada Lovelace", Course::Mathematics);

    let stored = repo.create(data.clone());
    let loaded = repo.get(stored.id).unwrap();

    assert_eq!(loaded.id, stored.id);
    assert_eq!(loaded.name, data.name);
    assert_eq!(loaded.email, data.email);
    assert_eq!(loaded.age, data.age);
    assert_eq!(loaded.course, data.course);
    assert_eq!(loaded.enrollment_date, data.enrollment_date);
}

#[test]
fn create_appends_in_insertion_order() {
    let mut repo = InMemoryRosterRepository::new();
    let first = repo.create(new_student("First", Course::Physics));
    let second = repo.create(new_student("Second", Course::Physics));
    let third = repo.create(new_student("Third", Course::Physics));

    let ids: Vec<_> = repo.list().into_iter().map(|student| student.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[test]
fn update_changes_only_the_given_field_of_the_given_record() {
    let mut repo = InMemoryRosterRepository::new();
    let target = repo.create(new_student("Target", Course::Chemistry));
    let other = repo.create(new_student("Other", Course::Chemistry));

    let updated = repo
        .update(
            target.id,
            StudentPatch {
                course: Some(Course::Engineering),
                ..StudentPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.course, Course::Engineering);
    let mut expected = target.clone();
    expected.course = Course::Engineering;
    assert_eq!(repo.get(target.id).unwrap(), expected);
    assert_eq!(repo.get(other.id).unwrap(), other);

    let ids: Vec<_> = repo.list().into_iter().map(|student| student.id).collect();
    assert_eq!(ids, vec![target.id, other.id]);
}

#[test]
fn update_with_unknown_id_leaves_collection_unchanged() {
    let mut repo = InMemoryRosterRepository::new();
    repo.create(new_student("Only", Course::Biology));
    let before = repo.list();

    let missing = Uuid::new_v4();
    let err = repo
        .update(
            missing,
            StudentPatch {
                name: Some("Ghost".to_string()),
                ..StudentPatch::default()
            },
        )
        .unwrap_err();

    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
    assert_eq!(repo.list(), before);
}

#[test]
fn delete_removes_exactly_one_or_zero() {
    let mut repo = InMemoryRosterRepository::new();
    let keep = repo.create(new_student("Keep", Course::Physics));
    let drop = repo.create(new_student("Drop", Course::Physics));

    repo.delete(drop.id).unwrap();
    assert_eq!(repo.len(), 1);
    assert!(repo.get(drop.id).is_none());
    assert!(repo.get(keep.id).is_some());

    let err = repo.delete(drop.id).unwrap_err();
    assert_eq!(err, RepoError::NotFound(drop.id));
    assert_eq!(repo.len(), 1);
}

#[test]
fn get_unknown_id_is_absent() {
    let repo = InMemoryRosterRepository::new();
    assert!(repo.get(Uuid::new_v4()).is_none());
    assert!(repo.is_empty());
}

#[test]
fn service_wraps_repository_calls() {
    let mut service = RosterService::in_memory();

    let created = service.create_student(new_student("From Service", Course::Biology));
    assert_eq!(service.get_student(created.id), Some(created.clone()));

    let renamed = service
        .update_student(
            created.id,
            StudentPatch {
                name: Some("Renamed".to_string()),
                ..StudentPatch::default()
            },
        )
        .unwrap();
    assert_eq!(renamed.name, "Renamed");

    let removed = service.delete_student(created.id).unwrap();
    assert_eq!(removed.id, created.id);
    assert!(service.is_empty());
    assert!(matches!(
        service.delete_student(created.id),
        Err(RepoError::NotFound(_))
    ));
}

#[test]
fn demo_roster_seeds_three_students() {
    let service = RosterService::with_demo_roster();
    let names: Vec<_> = service
        .list_students()
        .into_iter()
        .map(|student| student.name)
        .collect();
    assert_eq!(names, vec!["John Doe", "Jane Smith", "Mike Johnson"]);
}
