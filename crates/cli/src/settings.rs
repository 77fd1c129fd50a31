//! Settings file loading.
//!
//! An optional TOML file can provide solver defaults and `ryr` parameters:
//!
//! ```toml
//! [solver]
//! tol = 1e-8
//! max_iter = 200
//! switch_threshold = 0.01
//! y0 = 1.0
//! bracket = [0.5, 1.0]
//!
//! [ryr]
//! M = 2.7839e33
//! R = 1.2e6
//! a = 3e9
//! alpha = 6.28318530718
//! B = 2.8836e15
//! rho = 316094286571.96594
//! ```
//!
//! Command-line flags win over file values, which win over built-in defaults.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    error::{CliError, Result},
    functions::RyrParams,
};

/// The contents of a settings file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub solver: SolverSettings,

    pub ryr: Option<RyrSettings>,
}

/// The `[solver]` table.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverSettings {
    pub tol: Option<f64>,
    pub max_iter: Option<usize>,
    pub switch_threshold: Option<f64>,
    pub y0: Option<f64>,
    pub bracket: Option<[f64; 2]>,
}

/// The `[ryr]` table, keyed like the profile's symbols.
///
/// Every key is optional in the file so a partial table can be reported by
/// name; [`RyrSettings::params`] requires all six.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RyrSettings {
    #[serde(rename = "M")]
    pub mass: Option<f64>,
    #[serde(rename = "R")]
    pub radius: Option<f64>,
    pub a: Option<f64>,
    pub alpha: Option<f64>,
    #[serde(rename = "B")]
    pub b: Option<f64>,
    pub rho: Option<f64>,
}

impl Settings {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadSettings`] if the file cannot be read and
    /// [`CliError::ParseSettings`] if it is not a valid settings document.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadSettings {
            path: path.to_owned(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| CliError::ParseSettings {
            path: path.to_owned(),
            source,
        })
    }

    /// Resolves the `ryr` parameters, falling back to the defaults when the
    /// file has no `[ryr]` table.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::IncompleteParameters`] for a partial table.
    pub fn ryr_params(&self) -> Result<RyrParams> {
        match &self.ryr {
            Some(table) => table.params(),
            None => Ok(RyrParams::default()),
        }
    }
}

impl RyrSettings {
    /// Converts a complete table into parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::IncompleteParameters`] naming every missing key.
    pub fn params(&self) -> Result<RyrParams> {
        let fields = [
            ("M", self.mass),
            ("R", self.radius),
            ("a", self.a),
            ("alpha", self.alpha),
            ("B", self.b),
            ("rho", self.rho),
        ];
        let missing: Vec<&'static str> = fields
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect();

        match fields.map(|(_, value)| value) {
            [Some(mass), Some(radius), Some(a), Some(alpha), Some(b), Some(rho)] => Ok(RyrParams {
                mass,
                radius,
                a,
                alpha,
                b,
                rho,
            }),
            _ => Err(CliError::IncompleteParameters { missing }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_file_uses_defaults() {
        let settings: Settings = toml::from_str("").expect("valid toml");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.ryr_params().expect("defaults"), RyrParams::default());
    }

    #[test]
    fn parses_solver_and_ryr_tables() {
        let settings: Settings = toml::from_str(
            r#"
            [solver]
            tol = 1e-8
            max_iter = 250
            bracket = [0.5, 1.0]

            [ryr]
            M = 2.0e33
            R = 1.0e6
            a = 3e9
            alpha = 6.0
            B = 2.9e15
            rho = 3.0e11
            "#,
        )
        .expect("valid settings");

        assert_eq!(settings.solver.max_iter, Some(250));
        assert_eq!(settings.solver.bracket, Some([0.5, 1.0]));
        assert!(settings.solver.y0.is_none());

        let params = settings.ryr_params().expect("complete table");
        assert_relative_eq!(params.mass, 2.0e33);
        assert_relative_eq!(params.b, 2.9e15);
    }

    #[test]
    fn partial_ryr_table_names_missing_keys() {
        let settings: Settings = toml::from_str(
            r#"
            [ryr]
            M = 2.0e33
            R = 1.0e6
            a = 3e9
            alpha = 6.0
            "#,
        )
        .expect("valid settings");

        match settings.ryr_params() {
            Err(CliError::IncompleteParameters { missing }) => assert_eq!(missing, ["B", "rho"]),
            other => panic!("expected incomplete parameters, got {other:?}"),
        }
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: std::result::Result<Settings, _> =
            toml::from_str("[solver]\ntolerance = 1e-3\n");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let result = Settings::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(CliError::ReadSettings { .. })));
    }
}
