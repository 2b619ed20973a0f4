use crate::tests::{role_json, user_record_json};
use crate::{PagedData, Role, UserRecord, Validate};

use googletest::assert_that;
use googletest::prelude::{anything, err};
use serde_json::json;

#[test]
fn given_page_json_when_deserialized_then_cursors_preserved() {
    // Given
    let json = json!({
        "data": [role_json()],
        "next": 3,
        "prev": 1,
        "pages": 7
    });

    // When
    let page: PagedData<Role> = serde_json::from_value(json).unwrap();

    // Then
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.next, Some(3));
    assert_eq!(page.prev, Some(1));
    assert_eq!(page.pages, 7);
}

#[test]
fn given_null_cursors_when_deserialized_then_none() {
    // Given
    let json = json!({ "data": [], "next": null, "prev": null, "pages": 0 });

    // When
    let page: PagedData<Role> = serde_json::from_value(json).unwrap();

    // Then
    assert!(page.is_empty());
    assert_eq!(page.next, None);
    assert_eq!(page.prev, None);
}

#[test]
fn given_missing_pages_when_deserialized_then_error() {
    // Given
    let json = json!({ "data": [], "next": null, "prev": null });

    // When
    let result = serde_json::from_value::<PagedData<Role>>(json);

    // Then
    assert!(result.is_err());
}

#[test]
fn given_one_invalid_item_when_page_validated_then_whole_page_rejected() {
    // Given
    let mut bad = user_record_json();
    bad["first"] = "".into();
    let json = json!({
        "data": [user_record_json(), bad],
        "next": null,
        "prev": null,
        "pages": 1
    });
    let page: PagedData<UserRecord> = serde_json::from_value(json).unwrap();

    // When
    let result = page.into_validated();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
fn given_page_when_data_replaced_then_cursors_kept() {
    // Given
    let page = PagedData {
        data: vec![1, 2, 3],
        next: Some(2),
        prev: None,
        pages: 2,
    };

    // When
    let mapped = page.with_data(vec!["a", "b", "c"]);

    // Then
    assert_eq!(mapped.data, vec!["a", "b", "c"]);
    assert_eq!(mapped.next, Some(2));
    assert_eq!(mapped.prev, None);
    assert_eq!(mapped.pages, 2);
}
