use super::*;

#[test]
fn body_carries_name_and_user() {
    let payload = serde_json::to_value(category_body("Food", "", "u1")).unwrap();
    assert_eq!(payload["name"], serde_json::json!("Food"));
    assert_eq!(payload["user_id"], serde_json::json!("u1"));
}

#[test]
fn body_omits_empty_description() {
    assert_eq!(category_body("Food", "", "u1").description, None);
    let payload = serde_json::to_value(category_body("Food", "", "u1")).unwrap();
    assert!(payload.get("description").is_none());
}

#[test]
fn body_includes_set_description() {
    let payload =
        serde_json::to_value(category_body("Food", "groceries and takeout", "u1")).unwrap();
    assert_eq!(payload["description"], serde_json::json!("groceries and takeout"));
}
