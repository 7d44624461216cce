use latency_core::SolverOutput;

use crate::domain::solver::SolverError;
use crate::models::NativeSolverOutput;

/// Parses native solver stdout into a [`SolverOutput`].
pub fn parse_native_output(stdout: &[u8]) -> Result<SolverOutput, SolverError> {
    let text = String::from_utf8_lossy(stdout);
    let parsed: NativeSolverOutput = serde_json::from_str(text.trim())
        .map_err(|err| SolverError::OutputInvalid(format!("{err}; stdout={}", text.trim())))?;
    SolverOutput::try_from(parsed)
}

impl TryFrom<NativeSolverOutput> for SolverOutput {
    type Error = SolverError;

    fn try_from(out: NativeSolverOutput) -> Result<Self, Self::Error> {
        let fields = [
            ("rate", out.rate),
            ("power", out.power),
            ("bandwidth", out.bandwidth),
            ("latency", out.latency),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite() || *v <= 0.0) {
            return Err(SolverError::OutputInvalid(format!(
                "{name} must be positive, got {value}"
            )));
        }

        Ok(SolverOutput {
            rate: out.rate,
            power: out.power,
            bandwidth: out.bandwidth,
            latency: out.latency,
            iterations: out.iterations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_native_output_given_solver_json_should_return_output() {
        let stdout = b"{\n  \"rate\": 6.0056,\n  \"power\": 32.0002,\n  \"bandwidth\": 40.0001,\n  \"latency\": 2.227623\n}\n";
        let out = parse_native_output(stdout).unwrap();
        assert_eq!(out.rate, 6.0056);
        assert_eq!(out.latency, 2.227623);
        assert_eq!(out.iterations, None);
    }

    #[test]
    fn test_parse_native_output_keeps_reported_iterations() {
        let stdout = br#"{"rate":1,"power":1,"bandwidth":1,"latency":3,"iterations":12}"#;
        assert_eq!(parse_native_output(stdout).unwrap().iterations, Some(12));
    }

    #[test]
    fn test_parse_native_output_given_garbage_should_be_invalid() {
        assert!(matches!(
            parse_native_output(b"5 40 50 10 10 10\n"),
            Err(SolverError::OutputInvalid(_))
        ));
    }

    #[test]
    fn test_parse_native_output_given_missing_field_should_be_invalid() {
        assert!(matches!(
            parse_native_output(br#"{"rate":1,"power":1,"bandwidth":1}"#),
            Err(SolverError::OutputInvalid(_))
        ));
    }

    #[test]
    fn test_parse_native_output_given_non_positive_value_should_be_invalid() {
        let err = parse_native_output(br#"{"rate":1,"power":0,"bandwidth":1,"latency":2}"#)
            .unwrap_err();
        assert!(err.to_string().contains("power"));
    }
}
