//! Reading the PATH-like variable from the process environment.

use std::env::{self, VarError};

use crate::error::{Error, Result};

/// Read a PATH-like variable from the process environment.
///
/// # Errors
///
/// - [`Error::VariableNotSet`] if the variable is absent
/// - [`Error::VariableNotUnicode`] if its value is not valid Unicode
/// - [`Error::VariableEmpty`] if it is set to the empty string
pub fn read_variable(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if value.is_empty() => Err(Error::VariableEmpty { name: name.into() }),
        Ok(value) => {
            log::debug!("read {} bytes from {name}", value.len());
            Ok(value)
        }
        Err(VarError::NotPresent) => Err(Error::VariableNotSet { name: name.into() }),
        Err(VarError::NotUnicode(_)) => Err(Error::VariableNotUnicode { name: name.into() }),
    }
}
