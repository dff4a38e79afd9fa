//! Crate-level error types.

use std::fmt;

/// Errors produced by the strandview crate.
///
/// The controller's event operations never surface these to callers: an
/// ignored event is logged and dropped. They are returned from the fallible
/// building blocks (control parsing, presets, web bindings).
#[derive(Debug)]
pub enum StrandError {
    /// A click or hover arrived for an atom with no residue id (solvent,
    /// unassigned points).
    InvalidSelection,
    /// The structure engine or scene renderer has not finished
    /// initializing (model still loading).
    EngineNotReady,
    /// A control-change event named a control the viewer does not have.
    UnknownControl(String),
    /// A control received a value of the wrong kind or an unknown choice.
    InvalidControlValue {
        /// Name of the control.
        control: String,
        /// The rejected value, rendered as text.
        value: String,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A call into the JavaScript engine failed.
    Js(String),
}

impl fmt::Display for StrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSelection => {
                write!(f, "atom has no resolvable residue id")
            }
            Self::EngineNotReady => write!(f, "viewer engine is not ready"),
            Self::UnknownControl(name) => {
                write!(f, "unknown display control: {name}")
            }
            Self::InvalidControlValue { control, value } => {
                write!(f, "invalid value '{value}' for control '{control}'")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Js(msg) => write!(f, "javascript error: {msg}"),
        }
    }
}

impl std::error::Error for StrandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StrandError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_control() {
        let err = StrandError::InvalidControlValue {
            control: "cartoon_color".to_owned(),
            value: "rainbow".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value 'rainbow' for control 'cartoon_color'"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;
        let err = StrandError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing preset",
        ));
        assert!(err.source().is_some());
        assert!(StrandError::EngineNotReady.source().is_none());
    }
}
