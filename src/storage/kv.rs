//! String-valued key-value persistence.

use crate::error::FocusError;

/// A key-value store holding string values.
///
/// The session collection lives under a single key as a JSON document, so
/// this is the only persistence surface the focus feature needs.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, FocusError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), FocusError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&self, key: &str) -> Result<(), FocusError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, FocusError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FocusError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), FocusError> {
        (**self).remove(key)
    }
}
