//! Name based access to model state variables and parameters, and the elementwise
//! arithmetic an integrator needs from a state vector.

use std::collections::HashMap;
use crate::error::{FieldError, FieldKind};
use super::ModelFamily;

pub use neuron_fields_derive::{NamedFields, StateVector};


/// Exposes every field of a state or parameter struct under its schema name
pub trait NamedFields {
    /// Schema names in declaration order
    fn field_names() -> &'static [&'static str];
    /// Returns the value of the given field, `None` if the name is not in the schema
    fn get_field(&self, name: &str) -> Option<f64>;
    /// Returns a mutable reference to the given field, `None` if the name is not in the schema
    fn get_field_mut(&mut self, name: &str) -> Option<&mut f64>;
}

/// Elementwise operations over a fixed size state vector
pub trait StateVector: Sized {
    /// Combines two states field by field
    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Self;
    /// Returns field values in declaration order
    fn values(&self) -> Vec<f64>;

    /// Returns `self + factor * other`
    fn add_scaled(&self, other: &Self, factor: f64) -> Self {
        self.zip_with(other, |x, dx| x + factor * dx)
    }

    /// Whether every value is finite, derived states override this without allocating
    fn is_finite(&self) -> bool {
        self.values().iter().all(|i| i.is_finite())
    }
}

pub(crate) fn unknown_field(family: ModelFamily, kind: FieldKind, name: &str) -> FieldError {
    FieldError::UnknownField { family, kind, name: name.to_string() }
}

/// Reads a field by name, failing with [`FieldError::UnknownField`] if it does not exist
pub fn get_named<T: NamedFields>(
    fields: &T,
    name: &str,
    family: ModelFamily,
    kind: FieldKind,
) -> Result<f64, FieldError> {
    fields.get_field(name)
        .ok_or_else(|| unknown_field(family, kind, name))
}

/// Writes a field by name, failing with [`FieldError::UnknownField`] if it does not exist
pub fn set_named<T: NamedFields>(
    fields: &mut T,
    name: &str,
    value: f64,
    family: ModelFamily,
    kind: FieldKind,
) -> Result<(), FieldError> {
    match fields.get_field_mut(name) {
        Some(field) => {
            *field = value;

            Ok(())
        },
        None => Err(unknown_field(family, kind, name)),
    }
}

/// Applies every value in `values` to `fields`, names are all checked before
/// anything is written so a failed overlay leaves `fields` untouched
pub fn overlay_named<T: NamedFields>(
    fields: &mut T,
    values: &HashMap<String, f64>,
    family: ModelFamily,
    kind: FieldKind,
) -> Result<(), FieldError> {
    if let Some(name) = values.keys().find(|name| !T::field_names().contains(&name.as_str())) {
        return Err(unknown_field(family, kind, name));
    }

    for (name, value) in values.iter() {
        set_named(fields, name, *value, family, kind)?;
    }

    Ok(())
}

/// Collects every field into a name to value map
pub fn to_named_map<T: NamedFields>(fields: &T) -> HashMap<String, f64> {
    T::field_names()
        .iter()
        .filter_map(|name| fields.get_field(name).map(|value| (name.to_string(), value)))
        .collect()
}
