//! Command line invocation handling for the `eci2ecef` binary
//!
//! The binary takes exactly nine positional reals. Parsing lives here so it
//! can be exercised without spawning a process.

use crate::coordinates::Vector3;
use crate::converter::Conversion;
use crate::time::Timestamp;
use crate::{EcefError, Result};
use clap::ValueEnum;
use std::io::Write;

/// Names of the positional arguments, in order
pub const ARG_NAMES: [&str; 9] = [
    "year", "month", "day", "hour", "minute", "second", "eci_x_km", "eci_y_km", "eci_z_km",
];

/// Usage line printed when the argument count is wrong
pub const USAGE: &str =
    "Usage: eci2ecef year month day hour minute second eci_x_km eci_y_km eci_z_km";

/// Output format for conversion results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One component per line
    #[default]
    Plain,
    /// The full conversion report as JSON
    Json,
}

/// A parsed invocation: the timestamp and the vector to convert
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invocation {
    pub timestamp: Timestamp,
    pub vector: Vector3,
}

/// Parse one positional argument as a real number
fn parse_value(name: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|source| EcefError::Parse {
            name,
            value: value.to_string(),
            source,
        })
}

/// Parse the nine positional arguments
///
/// The count is checked before any value is parsed.
pub fn parse_invocation<S: AsRef<str>>(values: &[S]) -> Result<Invocation> {
    if values.len() != ARG_NAMES.len() {
        return Err(EcefError::Usage {
            found: values.len(),
        });
    }

    let mut parsed = [0.0_f64; 9];
    for ((slot, name), value) in parsed.iter_mut().zip(ARG_NAMES).zip(values) {
        *slot = parse_value(name, value.as_ref())?;
    }

    let [year, month, day, hour, minute, second, x, y, z] = parsed;
    Ok(Invocation {
        timestamp: Timestamp::new(year, month, day, hour, minute, second),
        vector: Vector3::new(x, y, z),
    })
}

/// Render a conversion in the requested format
///
/// Plain output is the three output components, one per line, each in the
/// shortest form that reads back to the same `f64`.
pub fn render(conversion: &Conversion, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => {
            let v = conversion.output;
            Ok(format!("{:?}\n{:?}\n{:?}", v.x, v.y, v.z))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(conversion)?),
    }
}

/// Render a conversion and write it, newline terminated, to `out`
pub fn write_conversion<W: Write>(
    out: &mut W,
    conversion: &Conversion,
    format: OutputFormat,
) -> Result<()> {
    writeln!(out, "{}", render(conversion, format)?)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::EciToEcefConverter;

    fn scenario_args() -> Vec<&'static str> {
        vec!["2024", "9", "29", "12", "0", "0", "6878.0", "0.0", "0.0"]
    }

    #[test]
    fn test_parse_scenario() {
        let invocation = parse_invocation(&scenario_args()).unwrap();
        assert_eq!(
            invocation.timestamp,
            Timestamp::new(2024.0, 9.0, 29.0, 12.0, 0.0, 0.0)
        );
        assert_eq!(invocation.vector, Vector3::new(6878.0, 0.0, 0.0));
    }

    #[test]
    fn test_parse_negative_and_exponent_values() {
        let args = ["2010", "3", "15", "6", "30", "15.25", "-4.2e3", "5100", "-2500.0"];
        let invocation = parse_invocation(&args).unwrap();
        assert_eq!(invocation.timestamp.second, 15.25);
        assert_eq!(invocation.vector, Vector3::new(-4200.0, 5100.0, -2500.0));
    }

    #[test]
    fn test_parse_hyphenated_reals() {
        let args = ["2024", "9", "29", "12", "0", "0", "-.5", "-0.0", "-inf"];
        let invocation = parse_invocation(&args).unwrap();
        assert_eq!(invocation.vector.x, -0.5);
        assert_eq!(invocation.vector.y, 0.0);
        assert_eq!(invocation.vector.z, f64::NEG_INFINITY);

        let args = ["2024", "9", "29", "12", "0", "0", "-nan", "0", "0"];
        assert!(parse_invocation(&args).unwrap().vector.x.is_nan());
    }

    #[test]
    fn test_wrong_arity() {
        let args = ["2024", "9", "29", "12", "0"];
        match parse_invocation(&args) {
            Err(EcefError::Usage { found }) => assert_eq!(found, 5),
            other => panic!("expected usage error, got {:?}", other),
        }

        let none: [&str; 0] = [];
        assert!(matches!(
            parse_invocation(&none),
            Err(EcefError::Usage { found: 0 })
        ));
    }

    #[test]
    fn test_wrong_arity_wins_over_bad_values() {
        let args = ["not", "numbers"];
        assert!(matches!(
            parse_invocation(&args),
            Err(EcefError::Usage { found: 2 })
        ));
    }

    #[test]
    fn test_parse_error_names_argument() {
        let mut args = scenario_args();
        args[1] = "sept";
        let err = parse_invocation(&args).unwrap_err();
        match &err {
            EcefError::Parse { name, value, .. } => {
                assert_eq!(*name, "month");
                assert_eq!(value, "sept");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(err.to_string().contains("month"));
        assert!(err.to_string().contains("sept"));
    }

    #[test]
    fn test_render_plain() {
        let invocation = parse_invocation(&scenario_args()).unwrap();
        let conversion = EciToEcefConverter::new().convert(&invocation.timestamp, invocation.vector);
        let text = render(&conversion, OutputFormat::Plain).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "0.0");
        for (line, expected) in lines.iter().zip(conversion.output.to_array()) {
            assert_eq!(line.parse::<f64>().unwrap(), expected);
        }
    }

    #[test]
    fn test_render_json() {
        let invocation = parse_invocation(&scenario_args()).unwrap();
        let conversion = EciToEcefConverter::new().convert(&invocation.timestamp, invocation.vector);
        let text = render(&conversion, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["julian_date"], 2460583.0);
        assert_eq!(value["input"]["x"], 6878.0);
        assert_eq!(value["timestamp"]["year"], 2024.0);

        let back: Conversion = serde_json::from_str(&text).unwrap();
        assert_eq!(back.timestamp, conversion.timestamp);
        assert!((back.output.x - conversion.output.x).abs() < 1e-9);
        assert!((back.output.y - conversion.output.y).abs() < 1e-9);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_conversion() {
        let invocation = parse_invocation(&scenario_args()).unwrap();
        let conversion = EciToEcefConverter::new().convert(&invocation.timestamp, invocation.vector);

        let mut buffer = Vec::new();
        write_conversion(&mut buffer, &conversion, OutputFormat::Plain).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("\n0.0\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let invocation = parse_invocation(&scenario_args()).unwrap();
        let conversion = EciToEcefConverter::new().convert(&invocation.timestamp, invocation.vector);

        let err = write_conversion(&mut ClosedPipe, &conversion, OutputFormat::Plain).unwrap_err();
        assert!(matches!(err, EcefError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
