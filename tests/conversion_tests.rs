use std::fs;
use std::path::{Path, PathBuf};

use number_fraction::Fraction;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct TestCase {
    value: f64,
    numerator: i64,
    denominator: i64,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    decimal_cases: Vec<TestCase>,
    continued_cases: Vec<TestCase>,
}

fn load_cases() -> TestCases {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("conversion-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e))
}

fn check_case(case: &TestCase, fraction: Fraction) -> Result<(), String> {
    if fraction.numerator() != case.numerator || fraction.denominator() != case.denominator {
        return Err(format!(
            "\n✗ Mismatch for value: {}\nExpected:   \"{}/{}\"\nActual:     \"{}\"",
            case.value, case.numerator, case.denominator, fraction
        ));
    }

    Ok(())
}

#[test]
fn test_decimal_expansion_cases() {
    let cases = load_cases();
    let mut failures = Vec::new();

    for case in &cases.decimal_cases {
        let fraction = Fraction::from_float(case.value)
            .unwrap_or_else(|e| panic!("Conversion of {} failed: {}", case.value, e));
        if let Err(msg) = check_case(case, fraction) {
            failures.push(msg);
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_continued_fraction_cases() {
    let cases = load_cases();
    let mut failures = Vec::new();

    for case in &cases.continued_cases {
        let fraction = Fraction::from_float_continued(case.value)
            .unwrap_or_else(|e| panic!("Conversion of {} failed: {}", case.value, e));
        if let Err(msg) = check_case(case, fraction) {
            failures.push(msg);
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn test_algorithms_diverge_for_the_same_input() {
    // The decimal route reconstructs the printed literal, the continued
    // route finds a smaller-denominator approximation. Both stay.
    let decimal = Fraction::from_float(1.2345).unwrap();
    let continued = Fraction::from_float_continued(1.2345).unwrap();

    assert_eq!(decimal.to_string(), "2469/2000");
    assert_eq!(continued.to_string(), "2011/1629");
    assert!((decimal.float_value() - continued.float_value()).abs() < 1e-5);
}

#[test]
fn test_explicit_tolerance() {
    let coarse = Fraction::from_float_with_tolerance(std::f64::consts::PI, 1e-3).unwrap();
    assert_eq!(coarse.to_string(), "22/7");

    let fine = Fraction::from_float_with_tolerance(std::f64::consts::PI, 1e-6).unwrap();
    assert_eq!(fine.to_string(), "355/113");
}

#[test]
fn test_converted_fractions_compose_with_arithmetic() {
    let quarter = Fraction::from_float(0.25).unwrap();
    let half = Fraction::from_float_continued(0.5).unwrap();

    assert_eq!(quarter.add(half).to_string(), "3/4");
    assert_eq!(half.divide_by(quarter).unwrap().to_string(), "2/1");
}
