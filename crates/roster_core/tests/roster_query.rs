use roster_core::{
    Course, InMemoryRosterRepository, NewStudent, RosterQuery, RosterService, SortOrder,
};

fn roster() -> RosterService<InMemoryRosterRepository> {
    let mut service = RosterService::in_memory();
    for (name, email, age, course, date) in [
        ("Alice Brown", "alice@uni.edu", 22, Course::Physics, "2024-02-10"),
        ("bob stone", "BOB@Mail.com", 19, Course::Mathematics, "2024-01-05"),
        ("Carol White", "carol@bob-labs.io", 30, Course::Physics, "2023-09-01"),
        ("Dan Green", "dan@uni.edu", 19, Course::Biology, "2024-03-15"),
    ] {
        service.create_student(NewStudent {
            name: name.to_string(),
            email: email.to_string(),
            age,
            course,
            enrollment_date: date.to_string(),
        });
    }
    service
}

fn names(service: &RosterService<InMemoryRosterRepository>, query: &RosterQuery) -> Vec<String> {
    service
        .query(query)
        .into_iter()
        .map(|student| student.name)
        .collect()
}

#[test]
fn search_is_case_insensitive_over_name_and_email() {
    let service = roster();
    let query = RosterQuery::new().search("BOB");
    assert_eq!(names(&service, &query), vec!["bob stone", "Carol White"]);
}

#[test]
fn search_term_is_not_trimmed() {
    let mut service = RosterService::in_memory();
    service.create_student(NewStudent {
        name: "Alice".to_string(),
        email: "alice@uni.edu".to_string(),
        age: 20,
        course: Course::Physics,
        enrollment_date: "2024-01-01".to_string(),
    });

    assert!(service.query(&RosterQuery::new().search("alice ")).is_empty());
    assert!(service.query(&RosterQuery::new().search(" ")).is_empty());
    assert_eq!(service.query(&RosterQuery::new().search("")).len(), 1);
}

#[test]
fn course_filter_is_exact() {
    let service = roster();
    let query = RosterQuery::new().course(Course::Physics);
    assert_eq!(names(&service, &query), vec!["Alice Brown", "Carol White"]);
}

#[test]
fn search_and_course_compose_with_and() {
    let service = roster();
    let query = RosterQuery::new().search("bob").course(Course::Physics);
    assert_eq!(names(&service, &query), vec!["Carol White"]);

    let query = RosterQuery::new().search("uni.edu").course(Course::Mathematics);
    assert!(service.query(&query).is_empty());
}

#[test]
fn empty_query_returns_insertion_order() {
    let service = roster();
    assert_eq!(
        names(&service, &RosterQuery::default()),
        vec!["Alice Brown", "bob stone", "Carol White", "Dan Green"]
    );
}

#[test]
fn sorting_orders_results() {
    let service = roster();
    assert_eq!(
        names(&service, &RosterQuery::new().sort(SortOrder::NameDesc)),
        vec!["Dan Green", "Carol White", "bob stone", "Alice Brown"]
    );
    assert_eq!(
        names(&service, &RosterQuery::new().sort(SortOrder::EnrollmentDateAsc)),
        vec!["Carol White", "bob stone", "Alice Brown", "Dan Green"]
    );
    assert_eq!(
        names(&service, &RosterQuery::new().sort(SortOrder::AgeAsc)),
        vec!["bob stone", "Dan Green", "Alice Brown", "Carol White"]
    );
}

#[test]
fn query_does_not_mutate_roster() {
    let service = roster();
    let before = service.list_students();
    service.query(&RosterQuery::new().search("alice").sort(SortOrder::NameAsc));
    assert_eq!(service.list_students(), before);
}

#[test]
fn courses_in_use_lists_distinct_courses() {
    let service = roster();
    assert_eq!(
        service.courses_in_use(),
        vec![Course::Physics, Course::Mathematics, Course::Biology]
    );
}
