//! Error types for the budget engine.
//!
//! The pure calculators never fail; these errors cover configuration loading
//! and caller misuse when a referenced scenario or project does not exist.

use thiserror::Error;

/// The main error type for the budget engine.
///
/// # Example
///
/// ```
/// use budget_engine::error::EngineError;
///
/// let error = EngineError::ScenarioNotFound {
///     id: "scenario-9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Scenario not found: scenario-9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value outside its allowed range.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// No scenario exists with the requested id.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// The scenario id that was requested.
        id: String,
    },

    /// No project exists with the requested id.
    #[error("Project not found: {id}")]
    ProjectNotFound {
        /// The project id that was requested.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "non_billable_percentage".to_string(),
            message: "must be between 0 and 100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value 'non_billable_percentage': must be between 0 and 100"
        );
    }

    #[test]
    fn test_project_not_found_displays_id() {
        let error = EngineError::ProjectNotFound {
            id: "project-7".to_string(),
        };
        assert_eq!(error.to_string(), "Project not found: project-7");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_scenario_not_found() -> EngineResult<()> {
            Err(EngineError::ScenarioNotFound {
                id: "missing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_scenario_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
