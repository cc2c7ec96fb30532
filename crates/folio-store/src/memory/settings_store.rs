use crate::{Result as StoreResult, traits::SettingsStore};

use folio_core::UserSettings;

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemorySettingsStore {
    inner: Mutex<HashMap<Uuid, UserSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_by_user(&self, user_id: Uuid) -> Option<UserSettings> {
        let map = self.inner.lock().expect("settings map poisoned");
        map.get(&user_id).cloned()
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn create_default(&self, user_id: Uuid) -> StoreResult<UserSettings> {
        let settings = UserSettings::default_for(user_id, Utc::now());
        let mut map = self.inner.lock().expect("settings map poisoned");
        map.insert(user_id, settings.clone());
        Ok(settings)
    }
}
