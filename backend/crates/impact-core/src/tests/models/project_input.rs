use crate::{CoreError, ProjectInput, ProjectStatus, REQUIRED_FIELDS_MESSAGE};

use googletest::prelude::*;

#[test]
fn given_padded_name_when_from_form_then_name_is_trimmed() {
    let input = ProjectInput::from_form("  Clean Water  ", "Ongoing").unwrap();

    assert_that!(input.project_name(), eq("Clean Water"));
    assert_that!(input.status(), eq(ProjectStatus::Ongoing));
}

#[test]
fn given_whitespace_name_when_from_form_then_required_fields_error() {
    let err = ProjectInput::from_form(" \t\n ", "Planned").unwrap_err();

    assert!(matches!(err, CoreError::Validation { .. }));
    assert_that!(err.message(), eq(REQUIRED_FIELDS_MESSAGE));
}

#[test]
fn given_empty_status_when_from_form_then_required_fields_error() {
    let err = ProjectInput::from_form("Solar Village", "").unwrap_err();

    assert_that!(err.message(), eq(REQUIRED_FIELDS_MESSAGE));
}

#[test]
fn given_unknown_status_when_from_form_then_lists_allowed_values() {
    let err = ProjectInput::from_form("Solar Village", "Paused").unwrap_err();

    assert!(matches!(err, CoreError::InvalidProjectStatus { ref value, .. } if value == "Paused"));
    assert_that!(err.message(), contains_substring("Planned, Ongoing, Completed"));
}

#[test]
fn given_empty_name_when_new_then_validation_error() {
    let result = ProjectInput::new("", ProjectStatus::Completed);

    assert!(result.is_err());
}
