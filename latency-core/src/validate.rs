use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::request::{OptimizationRequest, FIELDS};

/// Above this ratio of `minRate` to `maxBandwidth` the constraint set is
/// treated as unreachable.
const RATE_TO_BANDWIDTH_LIMIT: f64 = 10.0;

/// Checks caller supplied parameters and returns them as a typed request.
///
/// Each field in [`FIELDS`] is coerced to a number and must be finite and
/// strictly positive; the first offending field is reported. Then
/// `minRate < maxBandwidth * 10` must hold.
pub fn validate(fields: &Map<String, Value>) -> Result<OptimizationRequest, ValidationError> {
    let mut values = [0.0_f64; 6];
    for (slot, name) in values.iter_mut().zip(FIELDS) {
        let value = fields.get(name).map_or(f64::NAN, coerce);
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidField(name));
        }
        *slot = value;
    }

    let [min_rate, max_power, max_bandwidth, coeff_a, coeff_b, coeff_c] = values;
    if min_rate >= max_bandwidth * RATE_TO_BANDWIDTH_LIMIT {
        return Err(ValidationError::UnrealisticConstraint);
    }

    Ok(OptimizationRequest {
        min_rate,
        max_power,
        max_bandwidth,
        coeff_a,
        coeff_b,
        coeff_c,
    })
}

/// Loose numeric conversion: numbers as-is, numeric strings parsed, empty
/// strings and null as zero, booleans as 1/0, everything else NaN.
fn coerce(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn valid_payload() -> Map<String, Value> {
        payload(json!({
            "minRate": 5,
            "maxPower": 40,
            "maxBandwidth": 50,
            "coeffA": 10,
            "coeffB": 10,
            "coeffC": 10
        }))
    }

    #[test]
    fn test_validate_given_valid_payload_should_return_request() {
        let request = validate(&valid_payload()).unwrap();
        assert_eq!(request, OptimizationRequest::new(5.0, 40.0, 50.0, 10.0, 10.0, 10.0));
    }

    #[test]
    fn test_validate_given_zero_negative_or_missing_field_should_name_it() {
        for field in FIELDS {
            for bad in [json!(0), json!(-1.5), json!(null), json!("abc"), json!([1]), json!({})] {
                let mut fields = valid_payload();
                fields.insert(field.to_string(), bad.clone());
                assert_eq!(
                    validate(&fields),
                    Err(ValidationError::InvalidField(field)),
                    "{field} = {bad}"
                );
            }

            let mut fields = valid_payload();
            fields.remove(field);
            assert_eq!(validate(&fields), Err(ValidationError::InvalidField(field)));
        }
    }

    #[test]
    fn test_validate_given_infinite_string_should_reject() {
        let mut fields = valid_payload();
        fields.insert("coeffC".into(), json!("Infinity"));
        assert_eq!(validate(&fields), Err(ValidationError::InvalidField("coeffC")));
    }

    #[test]
    fn test_validate_reports_first_invalid_field_in_order() {
        let fields = payload(json!({ "coeffC": -1, "maxPower": 0 }));
        assert_eq!(validate(&fields), Err(ValidationError::InvalidField("minRate")));
    }

    #[test]
    fn test_validate_coerces_numeric_strings() {
        let mut fields = valid_payload();
        fields.insert("minRate".into(), json!(" 5.5 "));
        fields.insert("coeffA".into(), json!(true));
        let request = validate(&fields).unwrap();
        assert_eq!(request.min_rate, 5.5);
        assert_eq!(request.coeff_a, 1.0);
    }

    #[test]
    fn test_validate_given_rate_above_bandwidth_ceiling_should_reject() {
        let mut fields = valid_payload();
        fields.insert("minRate".into(), json!(100));
        fields.insert("maxBandwidth".into(), json!(5));
        let err = validate(&fields).unwrap_err();
        assert_eq!(err, ValidationError::UnrealisticConstraint);
        assert_eq!(
            err.to_string(),
            "Unrealistic constraint: minRate too high for bandwidth ceiling"
        );
    }

    #[test]
    fn test_validate_given_rate_exactly_at_ceiling_should_reject() {
        let mut fields = valid_payload();
        fields.insert("minRate".into(), json!(50));
        fields.insert("maxBandwidth".into(), json!(5));
        assert_eq!(validate(&fields), Err(ValidationError::UnrealisticConstraint));
    }

    #[test]
    fn test_invalid_field_message_names_field() {
        assert_eq!(
            ValidationError::InvalidField("maxBandwidth").to_string(),
            "Invalid value for maxBandwidth"
        );
    }
}
