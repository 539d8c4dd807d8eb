//! Error types for annealing runs and problem adapters.

use std::fmt;

/// Errors raised by a problem adapter, either while building an instance or
/// while perturbing or scoring a state.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterError {
    /// The state does not have the length the instance was built for.
    StateLength { expected: usize, found: usize },

    /// A state refers to an index outside the instance.
    IndexOutOfRange { index: usize, len: usize },

    /// A tour visits the same node more than once.
    DuplicateNode { node: usize },

    /// The instance data itself is malformed.
    InvalidInstance(String),

    /// The state is not one of the adapter's enumerated states.
    NotInStateSet,
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StateLength { expected, found } => {
                write!(f, "state has length {found}, expected {expected}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} elements")
            }
            Self::DuplicateNode { node } => write!(f, "node {node} appears more than once"),
            Self::InvalidInstance(msg) => write!(f, "invalid problem instance: {msg}"),
            Self::NotInStateSet => write!(f, "state is not a member of the state set"),
        }
    }
}

impl std::error::Error for AdapterError {}

/// Invalid engine or schedule parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A parameter is outside its admissible range.
    InvalidParameter { parameter: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(parameter: &str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { parameter, message } => {
                write!(f, "invalid parameter '{parameter}': {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by [`Annealer`](crate::sa::Annealer).
///
/// Adapter failures are carried unchanged in [`AnnealError::Adapter`]; the
/// engine never retries.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnealError {
    /// The start state is not in the adapter's finite state set.
    InvalidState(String),

    /// The engine was configured with unusable parameters.
    Configuration(ConfigError),

    /// `perturb` or `energy` failed.
    Adapter(AdapterError),
}

impl fmt::Display for AnnealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState(state) => {
                write!(f, "start state {state} is not in the discrete state set")
            }
            Self::Configuration(err) => write!(f, "configuration error: {err}"),
            Self::Adapter(err) => write!(f, "adapter error: {err}"),
        }
    }
}

impl std::error::Error for AnnealError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidState(_) => None,
            Self::Configuration(err) => Some(err),
            Self::Adapter(err) => Some(err),
        }
    }
}

impl From<AdapterError> for AnnealError {
    fn from(err: AdapterError) -> Self {
        Self::Adapter(err)
    }
}

impl From<ConfigError> for AnnealError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_adapter_error_is_source() {
        let err = AnnealError::from(AdapterError::IndexOutOfRange { index: 7, len: 4 });
        let source = err.source().expect("adapter error should be exposed");
        assert_eq!(source.to_string(), "index 7 out of range for 4 elements");
    }

    #[test]
    fn test_invalid_state_has_no_source() {
        let err = AnnealError::InvalidState("[9]".into());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("[9]"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::invalid("t_end", "must be positive");
        assert_eq!(err.to_string(), "invalid parameter 't_end': must be positive");
    }
}
