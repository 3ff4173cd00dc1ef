// SPDX-FileCopyrightText: 2023 Softbear, Inc.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::storage::{BrowserStorage, Error};

/// Remembers whether the user acknowledged the privacy notice.
pub struct ConsentStore {
    storage: BrowserStorage,
}

impl ConsentStore {
    pub const KEY: &'static str = "leo.privacyAccepted";

    pub fn new(storage: BrowserStorage) -> Self {
        Self { storage }
    }

    /// Backed by local storage.
    pub fn local() -> Self {
        Self::new(BrowserStorage::local())
    }

    /// Missing, unreadable, and malformed values all count as not accepted.
    pub fn accepted(&self) -> bool {
        self.storage.get::<bool>(Self::KEY).unwrap_or(false)
    }

    pub fn accept(&mut self) -> Result<(), Error> {
        self.storage.set(Self::KEY, Some(true))
    }

    /// Asks again next time.
    pub fn revoke(&mut self) -> Result<(), Error> {
        self.storage.set::<bool>(Self::KEY, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::consent::ConsentStore;
    use crate::storage::{BrowserStorage, Error};

    #[test]
    fn unavailable_storage_never_consents() {
        let mut consent = ConsentStore::new(BrowserStorage::no_op());
        assert!(!consent.accepted());
        assert_eq!(consent.accept(), Err(Error::Nonexistent));
        assert!(!consent.accepted());
        assert_eq!(consent.revoke(), Err(Error::Nonexistent));
    }
}
