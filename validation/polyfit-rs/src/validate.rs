use approx::abs_diff_eq;
use log::{debug, info};
use num_traits::Float;
use polyfit_rs::prelude::*;
use serde::Deserialize;
use std::error::Error;
use std::fmt::Debug;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

#[derive(Debug, Deserialize)]
struct ValidationCase {
    name: String,
    order_count: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default)]
    coefficients: Option<Vec<f64>>,
    #[serde(default)]
    values: Option<Vec<f64>>,
    #[serde(default)]
    mse: Option<f64>,
}

impl ValidationCase {
    /// Four samples, three coefficients.
    fn reference() -> Self {
        Self {
            name: "reference".into(),
            order_count: 3,
            x: vec![0.0, 1.0, 2.0, 3.0],
            y: vec![2.1, 0.7, -0.1, 1.3],
            coefficients: Some(vec![2.18, -2.42, 0.7]),
            values: Some(vec![2.18, 0.46, 0.14, 1.22]),
            mse: Some(0.128),
        }
    }
}

// ============================================================================
// Approximate Equality
// ============================================================================

/// Exact when `expected` is zero, otherwise `|(e - a) / e| < 1e-6`.
fn approx_eq(actual: f64, expected: f64) -> bool {
    if expected == 0.0 {
        return abs_diff_eq!(actual, expected, epsilon = 0.0);
    }
    ((expected - actual) / expected).abs() < 1e-6
}

fn approx_eq_all(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected)
            .all(|(&a, &e)| approx_eq(a, e))
}

fn report<V: Debug>(label: &str, actual: V, expected: Option<V>, ok: bool) {
    match expected {
        Some(e) => println!(
            "{label} = {actual:?}, expecting {e:?} {}",
            if ok { "" } else { "<-- mismatch" }
        ),
        None => println!("{label} = {actual:?}"),
    }
}

// ============================================================================
// Case Processing
// ============================================================================

fn convert<T: Float>(values: &[f64]) -> Result<Vec<T>, Box<dyn Error>> {
    values
        .iter()
        .map(|&v| T::from(v).ok_or_else(|| format!("{v} is not representable").into()))
        .collect()
}

fn widen<T: Float>(values: &[T]) -> Vec<f64> {
    values.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).collect()
}

fn process_case<T: Float>(case: &ValidationCase, precision: &str) -> Result<bool, Box<dyn Error>> {
    println!("--- {} ({precision}) ---", case.name);

    let x = convert::<T>(&case.x)?;
    let y = convert::<T>(&case.y)?;

    let mut p = Polynomial::<T>::new(case.order_count)?;
    p.fit(&x, &y)?;

    let coefficients = widen(p.coefficients());
    let values = widen(&p.values(&x));
    let mse = p.mse(&x, &y)?.to_f64().unwrap_or(f64::NAN);
    debug!("{}: fitted {} coefficients", case.name, coefficients.len());

    let c_ok = case
        .coefficients
        .as_deref()
        .is_none_or(|e| approx_eq_all(&coefficients, e));
    let v_ok = case
        .values
        .as_deref()
        .is_none_or(|e| approx_eq_all(&values, e));
    let m_ok = case.mse.is_none_or(|e| approx_eq(mse, e));

    report("C", coefficients.as_slice(), case.coefficients.as_deref(), c_ok);
    report("pY", values.as_slice(), case.values.as_deref(), v_ok);
    report("mse", mse, case.mse, m_ok);

    Ok(c_ok && v_ok && m_ok)
}

fn load_cases(dir: &Path) -> Result<Vec<ValidationCase>, Box<dyn Error>> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    paths.retain(|p| p.extension().and_then(|s| s.to_str()) == Some("json"));
    paths.sort();

    let mut cases = Vec::with_capacity(paths.len());
    for path in paths {
        info!("Loading {:?}", path);
        let file = fs::File::open(&path)?;
        cases.push(serde_json::from_reader(file)?);
    }
    Ok(cases)
}

fn run() -> Result<bool, Box<dyn Error>> {
    let cases = match std::env::args().nth(1) {
        Some(dir) => {
            let dir = Path::new(&dir);
            if !dir.is_dir() {
                return Err(format!("{:?} is not a directory", dir).into());
            }
            load_cases(dir)?
        }
        None => vec![ValidationCase::reference()],
    };

    let mut outcomes = Vec::with_capacity(cases.len() + 1);
    for case in &cases {
        outcomes.push((case.name.as_str(), process_case::<f64>(case, "f64")));
    }

    // Single precision must also meet the reference tolerance.
    let reference = ValidationCase::reference();
    outcomes.push((reference.name.as_str(), process_case::<f32>(&reference, "f32")));

    let mut all_ok = true;
    for (name, outcome) in outcomes {
        match outcome {
            Ok(ok) => all_ok &= ok,
            Err(e) => {
                println!("{name}: {e}");
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(true) => {
            println!("PASSED!");
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!("FAILED!");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Validation aborted: {}", e);
            println!("FAILED!");
            ExitCode::FAILURE
        }
    }
}
