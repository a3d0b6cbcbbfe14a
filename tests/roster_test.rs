//! Tests for the Roster

use agenda::domain::{DomainError, Person, Roster};

#[test]
fn given_empty_roster_when_inserting_same_person_twice_then_second_is_rejected() {
    // Arrange
    let mut roster = Roster::new();
    let person = Person::new("Ana", "Lopez", 30);

    // Act
    let first = roster.insert(person.clone());
    let second = roster.insert(person);

    // Assert
    assert!(first.is_ok());
    assert_eq!(
        second.unwrap_err(),
        DomainError::DuplicatePerson {
            name: "Ana".to_string(),
            surname: "Lopez".to_string()
        }
    );
    assert_eq!(roster.len(), 1);
}

#[test]
fn given_distinct_persons_when_inserting_then_order_is_preserved() {
    // Arrange
    let mut roster = Roster::new();
    let p1 = Person::new("Ana", "Lopez", 30);
    let p2 = Person::new("Juan", "Perez", 25);
    let p3 = Person::new("Eva", "Santos", 41);

    // Act
    roster.insert(p1.clone()).unwrap();
    roster.insert(p2.clone()).unwrap();
    roster.insert(p3.clone()).unwrap();

    // Assert
    assert_eq!(roster.people(), &[p1, p2, p3]);
}

#[test]
fn given_person_differing_in_one_field_when_inserting_then_not_a_duplicate() {
    let mut roster = Roster::new();
    roster.insert(Person::new("Ana", "Lopez", 30)).unwrap();

    // Same name and surname, different age: a different record.
    roster.insert(Person::new("Ana", "Lopez", 31)).unwrap();

    assert_eq!(roster.len(), 2);
}

#[test]
fn given_case_differing_person_when_inserting_then_not_a_duplicate() {
    // Duplicate matching is exact: no trimming, no case folding.
    let mut roster = Roster::new();
    roster.insert(Person::new("Ana", "Lopez", 30)).unwrap();

    roster.insert(Person::new("ana", "Lopez", 30)).unwrap();

    assert_eq!(roster.len(), 2);
}

#[test]
fn given_rejected_insert_when_inspecting_then_roster_unchanged() {
    // Arrange
    let mut roster = Roster::new();
    roster.insert(Person::new("Ana", "Lopez", 30)).unwrap();
    let snapshot = roster.clone();

    // Act
    let _ = roster.insert(Person::new("Ana", "Lopez", 30));

    // Assert
    assert_eq!(roster, snapshot);
}

#[test]
fn given_roster_when_iterating_then_yields_entries_in_insertion_order() {
    let mut roster = Roster::new();
    roster.insert(Person::new("Ana", "Lopez", 30)).unwrap();
    roster.insert(Person::new("Juan", "Perez", 25)).unwrap();

    let names: Vec<&str> = (&roster).into_iter().map(|p| p.name.as_str()).collect();

    assert_eq!(names, vec!["Ana", "Juan"]);
}
