use std::io::Write;

use anyhow::{bail, Context};
use log::info;
use ndarray::Array2;

use crate::{config, Regularizer, RegularizerBuilder};

const PROGRAM: &str = "lregularizer";

/// Runs the command line front end, writing its output to `out`.
///
/// # Arguments
/// * `args` - The full argument list, program name included.
/// * `out` - Where the gradient rows (and the penalty if asked) are written.
///
/// # Errors
/// Fails on a usage error, an unreadable or invalid spec or weight file.
pub fn run<W: Write>(args: &[String], out: &mut W) -> anyhow::Result<()> {
    let program = args.first().map_or(PROGRAM, String::as_str);
    let (Some(spec_path), Some(weight_path)) = (args.get(1), args.get(2)) else {
        bail!("Usage: {program} <regularizer.json> <weights.json> [--penalty]");
    };
    let show_penalty = args[3..].iter().any(|a| a == "--penalty");

    let spec = config::load_spec(spec_path).with_context(|| format!("reading {spec_path}"))?;
    let weight =
        config::load_matrix(weight_path).with_context(|| format!("reading {weight_path}"))?;

    let regularizer = RegularizerBuilder::new().build(&spec)?;
    info!("regularizing a {}x{} weight matrix", weight.nrows(), weight.ncols());

    let mut gradient = Array2::zeros(weight.dim());
    regularizer.evaluate(weight.view(), gradient.view_mut())?;

    let rows = config::matrix_to_rows(&gradient);
    writeln!(out, "{}", serde_json::to_string(&rows)?)?;

    if show_penalty {
        writeln!(out, "penalty: {}", regularizer.penalty(weight.view()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("lregularizer-cli-{}-{name}", std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prints_the_gradient_rows() {
        let spec = temp_file("l1.json", r#"{"l1": {"factor": 1.0}}"#);
        let weight = temp_file("l1-weights.json", "[[1.0, -2.0, 0.0]]");
        let mut out = Vec::new();

        run(
            &args(&[PROGRAM, spec.to_str().unwrap(), weight.to_str().unwrap()]),
            &mut out,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        let rows: Vec<Vec<f32>> = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(rows, vec![vec![1.0, -1.0, 0.0]]);
        assert!(!out.contains("penalty"));

        fs::remove_file(spec).unwrap();
        fs::remove_file(weight).unwrap();
    }

    #[test]
    fn prints_the_penalty_when_asked() {
        let spec = temp_file("l2.json", r#"{"l2": {"factor": 0.5}}"#);
        let weight = temp_file("l2-weights.json", "[[1.0, -2.0, 3.0]]");
        let mut out = Vec::new();

        run(
            &args(&[
                PROGRAM,
                spec.to_str().unwrap(),
                weight.to_str().unwrap(),
                "--penalty",
            ]),
            &mut out,
        )
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        let rows: Vec<Vec<f32>> = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(rows, vec![vec![1.0, -2.0, 3.0]]);
        // 0.5 * (1 + 4 + 9)
        assert_eq!(lines.next(), Some("penalty: 7"));

        fs::remove_file(spec).unwrap();
        fs::remove_file(weight).unwrap();
    }

    #[test]
    fn missing_spec_file_fails() {
        let weight = temp_file("orphan-weights.json", "[[1.0]]");
        let mut out = Vec::new();

        let err = run(
            &args(&[PROGRAM, "/definitely/not/here.json", weight.to_str().unwrap()]),
            &mut out,
        )
        .unwrap_err();

        assert!(err.to_string().contains("reading /definitely/not/here.json"));
        assert!(out.is_empty());
        fs::remove_file(weight).unwrap();
    }

    #[test]
    fn too_few_arguments_is_a_usage_error() {
        let mut out = Vec::new();

        let err = run(&args(&[PROGRAM, "spec.json"]), &mut out).unwrap_err();
        assert!(err.to_string().starts_with("Usage: lregularizer"));

        let err = run(&[], &mut out).unwrap_err();
        assert!(err.to_string().starts_with("Usage: lregularizer"));
    }
}
