//! Tests for RosterService

use agenda::application::services::RosterService;
use agenda::domain::{DomainError, Field, Person, PersonDraft};

#[test]
fn given_valid_draft_when_submitting_then_returns_inserted_person() {
    // Arrange
    let mut service = RosterService::new();

    // Act
    let person = service
        .submit(&PersonDraft::new("Ana", "Lopez", "30"))
        .expect("draft is valid");

    // Assert
    assert_eq!(person, Person::new("Ana", "Lopez", 30));
    assert_eq!(service.roster().people(), &[person]);
}

#[test]
fn given_invalid_draft_when_submitting_then_roster_unchanged() {
    // Arrange
    let mut service = RosterService::new();

    // Act
    let errors = service
        .submit(&PersonDraft::new("Juan", "Perez", "twenty"))
        .unwrap_err();

    // Assert
    assert_eq!(
        errors,
        vec![DomainError::InvalidNumber {
            field: Field::Age,
            value: "twenty".to_string()
        }]
    );
    assert!(service.roster().is_empty());
}

#[test]
fn given_duplicate_draft_when_submitting_then_single_element_error_list() {
    // Arrange
    let mut service = RosterService::new();
    service
        .submit(&PersonDraft::new("Ana", "Lopez", "30"))
        .unwrap();

    // Act
    let errors = service
        .submit(&PersonDraft::new("Ana", "Lopez", "30"))
        .unwrap_err();

    // Assert: duplicates surface through the same list shape as validation
    assert_eq!(
        errors,
        vec![DomainError::DuplicatePerson {
            name: "Ana".to_string(),
            surname: "Lopez".to_string()
        }]
    );
    assert_eq!(service.roster().len(), 1);
}
