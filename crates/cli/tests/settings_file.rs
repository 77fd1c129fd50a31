use std::{env, fs, path::PathBuf, process};

use clap::Parser;
use invert_cli::{Args, CliError, run};

/// A settings file in the temp dir, removed on drop.
struct TempSettings(PathBuf);

impl TempSettings {
    fn new(name: &str, contents: &str) -> Self {
        let path = env::temp_dir().join(format!("invert-{}-{name}.toml", process::id()));
        fs::write(&path, contents).expect("writable temp dir");
        Self(path)
    }
}

impl Drop for TempSettings {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn run_with(argv: &[&str]) -> Result<String, CliError> {
    let args = Args::try_parse_from(std::iter::once("invert").chain(argv.iter().copied()))
        .expect("valid args");
    let mut out = Vec::new();
    run(&args, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8"))
}

fn root_of(line: &str) -> f64 {
    line.strip_prefix("Root found: y = ")
        .and_then(|rest| rest.split(". Precision").next())
        .and_then(|y| y.parse().ok())
        .expect("root line")
}

#[test]
fn ryr_with_default_parameters() {
    let text = run_with(&["ryr"]).expect("solves");
    let root = root_of(text.lines().next().expect("output"));
    assert!((0.78..0.81).contains(&root), "root = {root}");
}

#[test]
fn file_supplies_bracket_and_method_needs_it() {
    let settings = TempSettings::new(
        "bracket",
        "[solver]\ntol = 1e-10\nbracket = [0.0, 1.0]\n",
    );
    let path = settings.0.to_str().expect("utf-8 path");

    let text = run_with(&["dottie", "--method", "brent", "--config", path]).expect("solves");
    let root = root_of(text.lines().next().expect("output"));
    assert!((root - 0.739_085_133_215_160_6).abs() < 1e-9);
}

#[test]
fn command_line_wins_over_file() {
    let settings = TempSettings::new("override", "[solver]\ny0 = 0.0\n");
    let path = settings.0.to_str().expect("utf-8 path");

    // y0 = 0 from the file would hit the stationary point of y² - 2.
    let text = run_with(&["sqrt2", "--config", path, "--y0", "1.0"]).expect("solves");
    assert!(text.starts_with("Root found: y = 1.4142"));
}

#[test]
fn settings_errors_are_typed() {
    let missing = env::temp_dir().join("invert-no-such-settings.toml");
    let result = run_with(&["sqrt2", "--config", missing.to_str().expect("utf-8 path")]);
    assert!(matches!(result, Err(CliError::ReadSettings { .. })));

    let settings = TempSettings::new("unknown", "[solver]\ntolerance = 1e-3\n");
    let result = run_with(&["sqrt2", "--config", settings.0.to_str().expect("utf-8 path")]);
    assert!(matches!(result, Err(CliError::ParseSettings { .. })));

    let settings = TempSettings::new("partial", "[ryr]\nM = 1.0\n");
    let result = run_with(&["ryr", "--config", settings.0.to_str().expect("utf-8 path")]);
    assert!(matches!(
        result,
        Err(CliError::IncompleteParameters { missing }) if missing.len() == 5
    ));
}
