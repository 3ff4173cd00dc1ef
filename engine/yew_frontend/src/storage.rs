// SPDX-FileCopyrightText: 2021 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use js_hooks::window;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use web_sys::Storage;

/// For interacting with the local storage API.
pub struct BrowserStorage {
    inner: Option<Storage>,
}

/// Errors that can occur with storages.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// Javascript error.
    Js,
    /// Serialization error.
    FromStr,
    /// Storage API is not available.
    Nonexistent,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Js => "storage threw an error",
            Self::FromStr => "stored value is malformed",
            Self::Nonexistent => "storage is unavailable",
        })
    }
}

impl std::error::Error for Error {}

impl BrowserStorage {
    /// Local storage, if the browser allows it. Otherwise, every call returns
    /// `Err(Error::Nonexistent)`.
    pub fn local() -> Self {
        Self::new(window().and_then(|w| w.local_storage().ok().flatten()))
    }

    /// Black hole; reads and writes will always return error.
    pub fn no_op() -> Self {
        Self::new(None)
    }

    fn new(inner: Option<Storage>) -> Self {
        Self { inner }
    }

    /// Gets a key from storage, returning None if it doesn't exist or any error occurs.
    pub fn get<V: FromStr>(&self, key: &str) -> Option<V> {
        self.try_get(key).ok().flatten()
    }

    /// Gets a key from storage, returning Ok(None) if it doesn't exist or Err if an error occurs.
    pub fn try_get<V: FromStr>(&self, key: &str) -> Result<Option<V>, Error> {
        self.inner
            .as_ref()
            .ok_or(Error::Nonexistent)?
            .get(key)
            .map_err(|_| Error::Js)?
            .map(|s| V::from_str(&s).map_err(|_| Error::FromStr))
            .transpose()
    }

    /// Sets a key in storage to a value, or removes it if the value is [`None`].
    pub fn set<V: ToString>(&mut self, key: &str, value: Option<V>) -> Result<(), Error> {
        let inner = self.inner.as_ref().ok_or(Error::Nonexistent)?;
        match value {
            Some(v) => inner.set(key, &v.to_string()),
            None => inner.delete(key),
        }
        .map_err(|_| Error::Js)
    }
}

#[cfg(test)]
mod tests {
    use crate::storage::{BrowserStorage, Error};

    #[test]
    fn no_op() {
        let mut storage = BrowserStorage::no_op();
        assert_eq!(storage.get::<bool>("key"), None);
        assert_eq!(storage.try_get::<bool>("key"), Err(Error::Nonexistent));
        assert_eq!(storage.set("key", Some(true)), Err(Error::Nonexistent));
        assert_eq!(storage.set::<bool>("key", None), Err(Error::Nonexistent));
    }
}
