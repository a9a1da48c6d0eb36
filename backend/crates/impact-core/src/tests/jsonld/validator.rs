use crate::{ProjectStatus, validate_envelope};

use googletest::prelude::*;
use serde_json::json;

fn valid_document() -> serde_json::Value {
    json!({
        "@context": {"ex": "http://example.org/impact/"},
        "@type": "ex:ImpactProject",
        "projectName": "  Mangrove Restoration ",
        "status": "Ongoing"
    })
}

#[test]
fn given_valid_document_when_validated_then_returns_trimmed_input() {
    let input = validate_envelope(&valid_document()).unwrap();

    assert_that!(input.project_name(), eq("Mangrove Restoration"));
    assert_that!(input.status(), eq(ProjectStatus::Ongoing));
}

#[test]
fn given_empty_object_when_validated_then_reports_every_missing_field() {
    let errors = validate_envelope(&json!({})).unwrap_err();

    assert_that!(
        errors,
        elements_are![
            eq("@context is required in JSON-LD"),
            eq("@type is required in JSON-LD"),
            eq("projectName is required"),
            eq("status is required"),
        ]
    );
}

#[test]
fn given_blank_name_and_bad_status_when_validated_then_reports_both() {
    let mut document = valid_document();
    document["projectName"] = json!("   ");
    document["status"] = json!("Paused");

    let errors = validate_envelope(&document).unwrap_err();

    assert_that!(
        errors,
        elements_are![
            eq("projectName must be a non-empty string"),
            eq("status must be one of Planned, Ongoing, Completed"),
        ]
    );
}

#[test]
fn given_non_string_name_when_validated_then_rejected() {
    let mut document = valid_document();
    document["projectName"] = json!(42);

    let errors = validate_envelope(&document).unwrap_err();

    assert_that!(errors, contains(eq("projectName must be a non-empty string")));
}

#[test]
fn given_missing_context_only_when_validated_then_single_error() {
    let mut document = valid_document();
    document.as_object_mut().unwrap().remove("@context");

    let errors = validate_envelope(&document).unwrap_err();

    assert_that!(errors, elements_are![eq("@context is required in JSON-LD")]);
}

#[test]
fn given_array_body_when_validated_then_every_field_reported_missing() {
    let errors = validate_envelope(&json!([1, 2])).unwrap_err();

    assert_that!(
        errors,
        elements_are![
            eq("@context is required in JSON-LD"),
            eq("@type is required in JSON-LD"),
            eq("projectName is required"),
            eq("status is required")
        ]
    );
}

#[test]
fn given_scalar_body_when_validated_then_every_field_reported_missing() {
    let errors = validate_envelope(&json!("Solar Wells")).unwrap_err();

    assert_eq!(errors.len(), 4);
}
