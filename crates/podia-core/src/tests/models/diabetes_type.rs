use crate::{CoreError, DiabetesType};

use std::str::FromStr;

#[test]
fn test_diabetes_type_as_str() {
    assert_eq!(DiabetesType::Type1.as_str(), "type_1");
    assert_eq!(DiabetesType::Type2.as_str(), "type_2");
    assert_eq!(DiabetesType::Gestational.as_str(), "gestational");
    assert_eq!(DiabetesType::PreDiabetes.as_str(), "pre_diabetes");
    assert_eq!(DiabetesType::Other.as_str(), "other");
}

#[test]
fn test_diabetes_type_round_trip() {
    for value in [
        DiabetesType::Type1,
        DiabetesType::Type2,
        DiabetesType::Gestational,
        DiabetesType::PreDiabetes,
        DiabetesType::Other,
    ] {
        assert_eq!(DiabetesType::from_str(value.as_str()).unwrap(), value);
    }
}

#[test]
fn test_diabetes_type_invalid_value() {
    let result = DiabetesType::from_str("type_3");

    assert!(matches!(
        result,
        Err(CoreError::InvalidDiabetesType { .. })
    ));
}
