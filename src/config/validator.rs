//! Config validator
//!
//! Checks keybinds, colors and UI settings and reports problems by severity.
//! At runtime invalid entries are skipped with a warning; the
//! `validate-config` command prints them and fails on errors.

use crate::config::Config;
use crate::core::actions::{parse_key_string, Action};
use crate::theme::parse_color;
use std::collections::HashMap;

/// Border styles the page frame understands
pub const BORDER_STYLES: [&str; 5] = ["single", "double", "rounded", "thick", "none"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    InvalidKey {
        combo: String,
    },
    UnknownAction {
        combo: String,
        action: String,
    },
    DuplicateBinding {
        combos: Vec<String>,
    },
    MissingQuitBinding,
    InvalidColor {
        field: String,
        value: String,
    },
    UnknownBorderStyle {
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::MissingQuitBinding
            | ValidationIssue::InvalidKey { .. }
            | ValidationIssue::UnknownAction { .. }
            | ValidationIssue::InvalidColor { .. } => ValidationSeverity::Error,
            ValidationIssue::DuplicateBinding { .. }
            | ValidationIssue::UnknownBorderStyle { .. } => ValidationSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::InvalidKey { combo } => {
                format!("Keybind '{}' is not a recognized key combination", combo)
            }
            ValidationIssue::UnknownAction { combo, action } => {
                format!("Keybind '{}' maps to unknown action '{}'", combo, action)
            }
            ValidationIssue::DuplicateBinding { combos } => {
                format!(
                    "Keybinds {} name the same key; only one will apply",
                    combos.join(", ")
                )
            }
            ValidationIssue::MissingQuitBinding => {
                "No key is bound to 'quit'; the only way out would be killing the process"
                    .to_string()
            }
            ValidationIssue::InvalidColor { field, value } => {
                format!("colors.{} = '{}' is not a #RRGGBB color", field, value)
            }
            ValidationIssue::UnknownBorderStyle { value } => {
                format!(
                    "ui.border_style '{}' is unknown, expected one of: {}",
                    value,
                    BORDER_STYLES.join(", ")
                )
            }
        }
    }
}

pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

/// Validate a loaded configuration
pub fn validate_config(config: &Config) -> ValidationResult {
    let mut issues = Vec::new();

    check_keybinds(&mut issues, config);

    for (field, value) in config.colors.entries() {
        if parse_color(value).is_none() {
            issues.push(ValidationIssue::InvalidColor {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    }

    if !BORDER_STYLES.contains(&config.ui.border_style.as_str()) {
        issues.push(ValidationIssue::UnknownBorderStyle {
            value: config.ui.border_style.clone(),
        });
    }

    ValidationResult { issues }
}

fn check_keybinds(issues: &mut Vec<ValidationIssue>, config: &Config) {
    // Sorted so reports are stable
    let mut combos: Vec<(&String, &String)> = config.keybinds.iter().collect();
    combos.sort();

    let mut by_key: HashMap<_, Vec<String>> = HashMap::new();
    let mut quit_bound = false;

    for (combo, action_name) in combos {
        let Some(key) = parse_key_string(combo) else {
            issues.push(ValidationIssue::InvalidKey {
                combo: combo.clone(),
            });
            continue;
        };

        match Action::from_name(action_name) {
            Some(action) => {
                quit_bound |= action == Action::Quit;
                by_key.entry(key).or_default().push(combo.clone());
            }
            None => issues.push(ValidationIssue::UnknownAction {
                combo: combo.clone(),
                action: action_name.clone(),
            }),
        }
    }

    let mut duplicates: Vec<Vec<String>> = by_key
        .into_values()
        .filter(|combos| combos.len() > 1)
        .collect();
    duplicates.sort();
    for combos in duplicates {
        issues.push(ValidationIssue::DuplicateBinding { combos });
    }

    if !quit_bound {
        issues.push(ValidationIssue::MissingQuitBinding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::embedded().unwrap();
        let result = validate_config(&config);
        assert!(result.is_valid(), "{:?}", result.issues);
        assert!(!result.has_warnings(), "{:?}", result.issues);
    }

    #[test]
    fn test_bad_keybinds_are_errors() {
        let config = Config::from_toml(
            r#"
            [keybinds]
            "hyper+x" = "quit"
            "z" = "launch_rockets"
            "#,
        )
        .unwrap();

        let result = validate_config(&config);
        assert!(result.has_errors());
        assert!(result.issues.contains(&ValidationIssue::InvalidKey {
            combo: "hyper+x".to_string()
        }));
        assert!(result.issues.contains(&ValidationIssue::UnknownAction {
            combo: "z".to_string(),
            action: "launch_rockets".to_string()
        }));
    }

    #[test]
    fn test_duplicate_binding_is_warning() {
        let config = Config::from_toml(
            r#"
            [keybinds]
            "ENTER" = "down"
            "enter" = "up"
            "#,
        )
        .unwrap();

        let result = validate_config(&config);
        assert!(result.is_valid());
        assert_eq!(
            result.warnings(),
            vec![&ValidationIssue::DuplicateBinding {
                combos: vec!["ENTER".to_string(), "enter".to_string()]
            }]
        );
    }

    #[test]
    fn test_unbinding_every_quit_key() {
        let config = Config::from_toml(
            r#"
            [keybinds]
            "q" = "none"
            "esc" = "none"
            "ctrl+c" = "none"
            "#,
        )
        .unwrap();

        let result = validate_config(&config);
        assert_eq!(result.errors(), vec![&ValidationIssue::MissingQuitBinding]);
    }

    #[test]
    fn test_bad_color_and_border() {
        let mut config = Config::embedded().unwrap();
        config.colors.heading = "orange-ish".to_string();
        config.ui.border_style = "wavy".to_string();

        let result = validate_config(&config);
        assert_eq!(
            result.errors(),
            vec![&ValidationIssue::InvalidColor {
                field: "heading".to_string(),
                value: "orange-ish".to_string()
            }]
        );
        assert_eq!(
            result.warnings(),
            vec![&ValidationIssue::UnknownBorderStyle {
                value: "wavy".to_string()
            }]
        );
    }
}
