use std::fmt::{Display, Debug, Formatter, Result};
use crate::neuron::ModelFamily;


/// Whether a field belongs to the state vector or to the parameter set of a model
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// State variable integrated over time
    StateVariable,
    /// Constant parameter read during integration
    Parameter,
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let kind = match self {
            FieldKind::StateVariable => "state variable",
            FieldKind::Parameter => "parameter",
        };

        write!(f, "{}", kind)
    }
}

impl Debug for FieldKind {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self)
    }
}

/// Error set for accessing model fields by name
#[derive(Clone, PartialEq)]
pub enum FieldError {
    /// Field name is not part of the model's schema
    UnknownField {
        /// Model family whose schema was queried
        family: ModelFamily,
        /// Whether a state variable or a parameter was requested
        kind: FieldKind,
        /// Offending name
        name: String,
    },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            FieldError::UnknownField { family, kind, name } => write!(
                f, "Unknown {} `{}` for {} model", kind, name, family
            ),
        }
    }
}

impl Debug for FieldError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for numerical integration
#[derive(Clone, Copy, PartialEq)]
pub enum IntegrationError {
    /// Step size must be positive and finite
    InvalidStepSize(f64),
}

impl Display for IntegrationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            IntegrationError::InvalidStepSize(dt) => write!(
                f, "Step size must be positive and finite, got {}", dt
            ),
        }
    }
}

impl Debug for IntegrationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for injected current inputs
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Current array does not have an entry for the requested step
    InputLength {
        /// Step that requested a current value
        step: usize,
        /// Length of the provided current array
        length: usize,
    },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            InputError::InputLength { step, length } => write!(
                f, "Input current array of length {} has no value for step {}", length, step
            ),
        }
    }
}

impl Debug for InputError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
#[derive(Clone, PartialEq)]
pub enum SpikingDynamicsError {
    /// Errors related to state variable or parameter names
    FieldRelatedError(FieldError),
    /// Errors related to the integration step
    IntegrationRelatedError(IntegrationError),
    /// Errors related to injected current
    InputRelatedError(InputError),
}

impl Display for SpikingDynamicsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            SpikingDynamicsError::FieldRelatedError(err) => write!(f, "{}", err),
            SpikingDynamicsError::IntegrationRelatedError(err) => write!(f, "{}", err),
            SpikingDynamicsError::InputRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for SpikingDynamicsError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for SpikingDynamicsError {}

impl From<FieldError> for SpikingDynamicsError {
    fn from(err: FieldError) -> SpikingDynamicsError {
        SpikingDynamicsError::FieldRelatedError(err)
    }
}

impl From<IntegrationError> for SpikingDynamicsError {
    fn from(err: IntegrationError) -> SpikingDynamicsError {
        SpikingDynamicsError::IntegrationRelatedError(err)
    }
}

impl From<InputError> for SpikingDynamicsError {
    fn from(err: InputError) -> SpikingDynamicsError {
        SpikingDynamicsError::InputRelatedError(err)
    }
}
