use crate::{CoreError, HealthLogData};

#[test]
fn test_symptom_accepts_full_range() {
    for level in 0..=10 {
        assert!(HealthLogData::symptom(level, false, false, None).is_ok());
    }
}

#[test]
fn test_symptom_rejects_pain_level_above_ten() {
    let result = HealthLogData::symptom(11, true, false, None);

    assert!(matches!(
        result,
        Err(CoreError::InvalidPainLevel { value: 11, .. })
    ));
}

#[test]
fn test_health_log_data_type_discriminator() {
    let symptom = HealthLogData::symptom(4, true, false, Some("tender heel".to_string())).unwrap();
    let json = serde_json::to_value(&symptom).unwrap();
    assert_eq!(json["type"], "symptom");
    assert_eq!(json["pain_level"], 4);
    assert_eq!(json["swelling"], true);

    let sugar = HealthLogData::blood_sugar(132.0);
    let json = serde_json::to_value(&sugar).unwrap();
    assert_eq!(json["type"], "blood_sugar");
    assert_eq!(json["level"], 132.0);
}

#[test]
fn test_symptom_omits_empty_notes() {
    let symptom = HealthLogData::symptom(2, false, true, None).unwrap();
    let json = serde_json::to_value(&symptom).unwrap();

    assert!(json.get("notes").is_none());
}
