use crate::Role;
use crate::Validate;
use crate::tests::{ROLE_ID, role_json};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_valid_json_when_deserialized_then_fields_mapped_from_camel_case() {
    // When
    let role: Role = serde_json::from_value(role_json()).unwrap();

    // Then
    assert_eq!(role.id.to_string(), ROLE_ID);
    assert_eq!(role.name, "Admin");
    assert!(!role.is_default);
    assert_that!(role.validate(), ok(anything()));
}

#[test]
fn given_padded_name_when_validated_then_trimmed() {
    // Given
    let mut json = role_json();
    json["name"] = "  Viewer \n".into();
    let role: Role = serde_json::from_value(json).unwrap();

    // When
    let role = role.into_validated().unwrap();

    // Then
    assert_that!(role.name.as_str(), eq("Viewer"));
}

#[test]
fn given_blank_description_when_validated_then_error() {
    // Given
    let mut json = role_json();
    json["description"] = "   ".into();
    let role: Role = serde_json::from_value(json).unwrap();

    // When
    let result = role.into_validated();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_missing_is_default_when_deserialized_then_error() {
    // Given
    let mut json = role_json();
    json.as_object_mut().unwrap().remove("isDefault");

    // When
    let result = serde_json::from_value::<Role>(json);

    // Then
    assert!(result.is_err());
}

#[test]
fn given_non_uuid_id_when_deserialized_then_error() {
    // Given
    let mut json = role_json();
    json["id"] = "admin".into();

    // When
    let result = serde_json::from_value::<Role>(json);

    // Then
    assert!(result.is_err());
}

#[test]
fn given_bad_timestamp_when_deserialized_then_error() {
    // Given
    let mut json = role_json();
    json["createdAt"] = "yesterday".into();

    // When
    let result = serde_json::from_value::<Role>(json);

    // Then
    assert!(result.is_err());
}
