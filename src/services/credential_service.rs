use std::rc::Rc;

use crate::error::StorageError;
use crate::models::Credential;
use crate::utils::{KeyValueStore, CREDENTIAL_KEY};

/// Reads and writes the bearer token under `accessToken`.
///
/// Shared handle: the session guard writes through it, the image store reads
/// through it on every request.
#[derive(Clone)]
pub struct CredentialStore {
    storage: Rc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn load(&self) -> Option<Credential> {
        self.storage.get_item(CREDENTIAL_KEY).map(Credential::new)
    }

    pub fn save(&self, credential: &Credential) -> Result<(), StorageError> {
        self.storage.set_item(CREDENTIAL_KEY, credential.as_str())
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(CREDENTIAL_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    #[test]
    fn test_reads_access_token_key() {
        let storage = Rc::new(MemoryStorage::with_item("accessToken", "abc"));
        let credentials = CredentialStore::new(storage.clone());
        assert_eq!(credentials.load(), Some(Credential::new("abc")));

        credentials.save(&Credential::new("def")).unwrap();
        assert_eq!(storage.get_item("accessToken").as_deref(), Some("def"));

        credentials.clear().unwrap();
        assert_eq!(credentials.load(), None);
    }

    #[test]
    fn test_missing_token() {
        let credentials = CredentialStore::new(Rc::new(MemoryStorage::new()));
        assert_eq!(credentials.load(), None);
    }
}
