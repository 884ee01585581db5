use crate::Profile;

#[test]
fn test_serialization_skips_unset_fields() {
    let profile = Profile {
        name: Some("Jane".to_string()),
        ..Profile::default()
    };

    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["name"], "Jane");
    assert!(json.get("age").is_none());
    assert!(json.get("diabetes_type").is_none());
}

#[test]
fn test_deserialization_tolerates_missing_fields() {
    let profile: Profile = serde_json::from_str(r#"{ "name": "Jane", "age": 42 }"#).unwrap();

    assert_eq!(profile.name.as_deref(), Some("Jane"));
    assert_eq!(profile.age, Some(42));
    assert_eq!(profile.medications, None);
}
