use crate::{Result as StoreResult, StoreError, traits::IdentityStore};

use folio_core::Identity;

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Mutex;

use async_trait::async_trait;
use error_location::ErrorLocation;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryIdentityStore {
    // Locked for the whole duration of every operation, so the
    // email-uniqueness check and the write it guards are atomic.
    inner: Mutex<HashMap<Uuid, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("identity map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl IdentityStore for InMemoryIdentityStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        let map = self.inner.lock().expect("identity map poisoned");
        Ok(map.values().find(|i| i.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Identity>> {
        let map = self.inner.lock().expect("identity map poisoned");
        Ok(map.get(&id).cloned())
    }

    async fn insert(&self, identity: Identity) -> StoreResult<Identity> {
        let mut map = self.inner.lock().expect("identity map poisoned");

        if map.values().any(|i| i.email == identity.email) {
            return Err(StoreError::Conflict {
                email: identity.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        map.insert(identity.id, identity.clone());
        Ok(identity)
    }

    async fn update(&self, identity: Identity) -> StoreResult<Identity> {
        let mut map = self.inner.lock().expect("identity map poisoned");

        if !map.contains_key(&identity.id) {
            return Err(StoreError::NotFound {
                id: identity.id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if map
            .values()
            .any(|i| i.id != identity.id && i.email == identity.email)
        {
            return Err(StoreError::Conflict {
                email: identity.email,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        map.insert(identity.id, identity.clone());
        Ok(identity)
    }
}
