use crate::tests::{ROLE_ID, USER_ID, user_record_json};
use crate::{User, UserRecord, Validate};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

fn record() -> UserRecord {
    serde_json::from_value(user_record_json()).unwrap()
}

#[test]
fn given_valid_json_when_deserialized_then_record_validates() {
    // When
    let record = record();

    // Then
    assert_eq!(record.id.to_string(), USER_ID);
    assert_eq!(record.role_id.to_string(), ROLE_ID);
    assert_that!(record.validate(), ok(anything()));
}

#[test]
fn given_record_when_joined_with_role_then_user_keeps_all_fields() {
    // Given
    let record = record();

    // When
    let user = User::from_record(record.clone(), "Admin");

    // Then
    assert_eq!(user.role, "Admin");
    assert_eq!(user.first, "Ada");
    assert_eq!(user.to_record(), record);
}

#[test]
fn given_user_when_serialized_then_role_included_in_camel_case() {
    // Given
    let user = User::from_record(record(), "Admin");

    // When
    let json = serde_json::to_value(&user).unwrap();

    // Then
    assert_eq!(json["role"], "Admin");
    assert_eq!(json["roleId"], ROLE_ID);
    assert!(json.get("role_id").is_none());
}

#[test]
fn given_relative_photo_when_validated_then_error() {
    // Given
    let mut json = user_record_json();
    json["photo"] = "/avatars/ada.png".into();
    let record: UserRecord = serde_json::from_value(json).unwrap();

    // When
    let result = record.into_validated();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_padded_names_when_validated_then_trimmed() {
    // Given
    let mut json = user_record_json();
    json["first"] = " Ada ".into();
    json["last"] = "Lovelace\t".into();
    let record: UserRecord = serde_json::from_value(json).unwrap();

    // When
    let record = record.into_validated().unwrap();

    // Then
    assert_that!(record.first.as_str(), eq("Ada"));
    assert_that!(record.last.as_str(), eq("Lovelace"));
}

#[test]
fn given_blank_role_name_when_user_validated_then_error() {
    // Given
    let user = User::from_record(record(), " ");

    // When
    let result = user.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_missing_role_id_when_deserialized_then_error() {
    // Given
    let mut json = user_record_json();
    json.as_object_mut().unwrap().remove("roleId");

    // When
    let result = serde_json::from_value::<UserRecord>(json);

    // Then
    assert!(result.is_err());
}
