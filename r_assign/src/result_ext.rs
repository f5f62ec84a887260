//! Conversion of foreign errors into [`AssignResult`].
//!
//! Anything convertible into [`AssignError`] (today only
//! `serde_json::Error`, which becomes [`AssignError::Deserialize`]) can be
//! lifted with [`AssignResultExt::into_assign`]:
//!
//! ```
//! use r_assign::{AssignError, AssignResultExt};
//! use serde_json::Value;
//!
//! let parsed: Result<Value, _> = serde_json::from_str("{");
//! let err = parsed.into_assign().unwrap_err();
//! assert!(matches!(*err, AssignError::Deserialize(_)));
//! ```

use std::sync::Arc;

use crate::{AssignError, AssignResult};

/// Lifts `Result<T, E>` into [`AssignResult<T>`] when `E: Into<AssignError>`.
pub trait AssignResultExt<T, E> {
    /// Convert the error side and wrap it in an [`Arc`].
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn into_assign(self) -> AssignResult<T>;
}

impl<T, E> AssignResultExt<T, E> for Result<T, E>
where
    E: Into<AssignError>,
{
    fn into_assign(self) -> AssignResult<T> {
        self.map_err(|err| Arc::new(err.into()))
    }
}
