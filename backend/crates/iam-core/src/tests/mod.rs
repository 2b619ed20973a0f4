mod models;

use serde_json::{Value, json};

pub(crate) const ROLE_ID: &str = "6f1c2b8e-3d4a-4c5b-9e7f-0a1b2c3d4e5f";
pub(crate) const USER_ID: &str = "0b7e4f2a-1c3d-4e5f-8a9b-c0d1e2f3a4b5";

pub(crate) fn role_json() -> Value {
    json!({
        "id": ROLE_ID,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-02-01T12:30:00.000Z",
        "name": "Admin",
        "description": "Full access",
        "isDefault": false
    })
}

pub(crate) fn user_record_json() -> Value {
    json!({
        "id": USER_ID,
        "createdAt": "2024-01-01T00:00:00.000Z",
        "updatedAt": "2024-01-02T00:00:00.000Z",
        "first": "Ada",
        "last": "Lovelace",
        "roleId": ROLE_ID,
        "photo": "https://example.com/ada.png"
    })
}
