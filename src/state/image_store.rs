// ============================================================================
// IMAGE STORE - In-memory image list + remote synchronization
// ============================================================================
// Single owner of the image list for the page load. Every remote failure is
// logged here and returned; callers may ignore it, the list is left as the
// operation's failure rule says. Changes are published as StoreEvents.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use chrono::{NaiveDate, Utc};

use crate::error::{ApiError, StoreError};
use crate::models::{Credential, ImageRecord, UploadFile};
use crate::services::{CredentialStore, ImageApi};
use crate::state::Subscribers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    Load,
    Upload,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    LoadingChanged(bool),
    Loaded { count: usize },
    Added(ImageRecord),
    Removed { id: String },
    UploadingChanged(bool),
    Failed { operation: StoreOperation, error: StoreError },
}

type Today = Rc<dyn Fn() -> NaiveDate>;

pub struct ImageStore<A> {
    api: Rc<A>,
    credentials: CredentialStore,
    images: Rc<RefCell<Vec<ImageRecord>>>,
    loading: Rc<RefCell<bool>>,
    uploading: Rc<RefCell<bool>>,
    disposed: Rc<RefCell<bool>>,
    events: Subscribers<StoreEvent>,
    today: Today,
}

impl<A> Clone for ImageStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            credentials: self.credentials.clone(),
            images: self.images.clone(),
            loading: self.loading.clone(),
            uploading: self.uploading.clone(),
            disposed: self.disposed.clone(),
            events: self.events.clone(),
            today: self.today.clone(),
        }
    }
}

impl<A: ImageApi> ImageStore<A> {
    /// New store. Starts in the loading state: nothing has been fetched yet.
    pub fn new(api: Rc<A>, credentials: CredentialStore) -> Self {
        Self {
            api,
            credentials,
            images: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(true)),
            uploading: Rc::new(RefCell::new(false)),
            disposed: Rc::new(RefCell::new(false)),
            events: Subscribers::new(),
            today: Rc::new(|| Utc::now().date_naive()),
        }
    }

    /// Override the date stamped on new records
    pub fn with_today<F>(mut self, today: F) -> Self
    where
        F: Fn() -> NaiveDate + 'static,
    {
        self.today = Rc::new(today);
        self
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&StoreEvent) + 'static,
    {
        self.events.subscribe(callback);
    }

    pub fn images(&self) -> Vec<ImageRecord> {
        self.images.borrow().clone()
    }

    pub fn find(&self, id: &str) -> Option<ImageRecord> {
        self.images.borrow().iter().find(|image| image.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.images.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.borrow().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn is_uploading(&self) -> bool {
        *self.uploading.borrow()
    }

    pub fn is_disposed(&self) -> bool {
        *self.disposed.borrow()
    }

    /// Stop applying results. Requests already in flight still run to
    /// completion, their outcome is dropped.
    pub fn dispose(&self) {
        log::info!("🧹 [STORE] Disposed, pending results will be discarded");
        *self.disposed.borrow_mut() = true;
    }

    /// Undo `dispose()` when the page comes back from the back/forward cache
    pub fn restore(&self) {
        if self.is_disposed() {
            log::info!("♻️ [STORE] Restored, results are applied again");
            *self.disposed.borrow_mut() = false;
        }
    }

    /// Fetch the full list and replace the local one
    pub async fn load(&self) -> Result<Vec<ImageRecord>, StoreError> {
        log::info!("📋 [STORE] Loading images...");
        self.set_loading(true);

        let result = self.fetch_records().await;

        let outcome = if self.is_disposed() {
            Err(StoreError::Disposed)
        } else {
            match result {
                Ok(records) => {
                    *self.images.borrow_mut() = records.clone();
                    log::info!("✅ [STORE] {} images loaded", records.len());
                    self.emit(StoreEvent::Loaded { count: records.len() });
                    Ok(records)
                }
                Err(err) => {
                    self.images.borrow_mut().clear();
                    Err(self.fail(StoreOperation::Load, err.into()))
                }
            }
        };

        self.set_loading(false);
        outcome
    }

    /// Upload one file and append the resulting record (no re-fetch)
    pub async fn upload(&self, file: UploadFile) -> Result<ImageRecord, StoreError> {
        if self.is_uploading() {
            log::warn!("⚠️ [STORE] Upload of {} rejected: another upload is in progress", file.name);
            return Err(StoreError::UploadInProgress);
        }

        log::info!("📤 [STORE] Uploading {} ({} bytes)", file.name, file.len());
        self.set_uploading(true);

        let result = self.send_upload(&file).await;

        self.set_uploading(false);

        if self.is_disposed() {
            return Err(StoreError::Disposed);
        }

        match result {
            Ok(file_url) => {
                let record = ImageRecord::new(file_url, file.name, (self.today)());
                self.insert(record.clone());
                log::info!("✅ [STORE] Added {} ({} images)", record.name, self.len());
                self.emit(StoreEvent::Added(record.clone()));
                Ok(record)
            }
            Err(err) => Err(self.fail(StoreOperation::Upload, err.into())),
        }
    }

    /// Delete the image at `url` remotely, then drop the record with `id`.
    /// Returns whether a local record was removed.
    pub async fn delete(&self, id: &str, url: &str) -> Result<bool, StoreError> {
        log::info!("🗑️ [STORE] Deleting {}", id);

        let result = match self.credential() {
            Ok(credential) => self.api.delete_image(&credential, url).await,
            Err(err) => Err(err),
        };

        if self.is_disposed() {
            return Err(StoreError::Disposed);
        }

        match result {
            Ok(()) => {
                let removed = {
                    let mut images = self.images.borrow_mut();
                    let before = images.len();
                    images.retain(|image| image.id != id);
                    images.len() != before
                };
                if removed {
                    log::info!("✅ [STORE] Removed {} ({} images)", id, self.len());
                    self.emit(StoreEvent::Removed { id: id.to_string() });
                } else {
                    log::debug!("ℹ️ [STORE] {} was not in the list, nothing to remove", id);
                }
                Ok(removed)
            }
            Err(err) => Err(self.fail(StoreOperation::Delete, err.into())),
        }
    }

    fn credential(&self) -> Result<Credential, ApiError> {
        self.credentials.load().ok_or(ApiError::MissingCredential)
    }

    async fn fetch_records(&self) -> Result<Vec<ImageRecord>, ApiError> {
        let credential = self.credential()?;
        let remote = self.api.list_images(&credential).await?;

        let today = (self.today)();
        let mut seen = HashSet::with_capacity(remote.len());
        let mut records = Vec::with_capacity(remote.len());
        for entry in remote {
            if !seen.insert(entry.url.clone()) {
                log::warn!("⚠️ [STORE] Duplicate image {} in listing, keeping the first", entry.url);
                continue;
            }
            records.push(ImageRecord::from_remote(entry, today));
        }
        Ok(records)
    }

    async fn send_upload(&self, file: &UploadFile) -> Result<String, ApiError> {
        let credential = self.credential()?;
        self.api.upload_image(&credential, file).await
    }

    // Same URL uploaded again: the service overwrote it, keep one record
    fn insert(&self, record: ImageRecord) {
        let mut images = self.images.borrow_mut();
        match images.iter_mut().find(|image| image.id == record.id) {
            Some(existing) => *existing = record,
            None => images.push(record),
        }
    }

    fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
        self.emit(StoreEvent::LoadingChanged(loading));
    }

    fn set_uploading(&self, uploading: bool) {
        *self.uploading.borrow_mut() = uploading;
        self.emit(StoreEvent::UploadingChanged(uploading));
    }

    fn fail(&self, operation: StoreOperation, error: StoreError) -> StoreError {
        log::error!("❌ [STORE] {:?} failed: {}", operation, error);
        self.emit(StoreEvent::Failed {
            operation,
            error: error.clone(),
        });
        error
    }

    fn emit(&self, event: StoreEvent) {
        if self.is_disposed() {
            return;
        }
        self.events.notify(&event);
    }
}
