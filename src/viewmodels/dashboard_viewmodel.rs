// ============================================================================
// DASHBOARD VIEWMODEL - Phase state machine + user commands
// ============================================================================
// Loading -> Empty | Populated, driven by the store's loading flag and list
// size. Uploading only overlays the upload control. Theme is separate.
// ============================================================================

use crate::error::StoreError;
use crate::models::{ImageRecord, Theme, UploadFile};
use crate::services::ImageApi;
use crate::state::{ImageStore, ThemeState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Empty,
    Populated,
}

/// What the upload button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadControl {
    pub disabled: bool,
    pub label: &'static str,
}

pub struct DashboardViewModel<A> {
    store: ImageStore<A>,
    theme: ThemeState,
}

impl<A: ImageApi> DashboardViewModel<A> {
    pub fn new(store: ImageStore<A>, theme: ThemeState) -> Self {
        Self { store, theme }
    }

    pub fn phase(&self) -> DashboardPhase {
        if self.store.is_loading() {
            DashboardPhase::Loading
        } else if self.store.is_empty() {
            DashboardPhase::Empty
        } else {
            DashboardPhase::Populated
        }
    }

    pub fn upload_control(&self) -> UploadControl {
        if self.store.is_uploading() {
            UploadControl { disabled: true, label: "Uploading..." }
        } else {
            UploadControl { disabled: false, label: "Upload" }
        }
    }

    pub fn images(&self) -> Vec<ImageRecord> {
        self.store.images()
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Dashboard became visible: fetch the list
    pub async fn mount(&self) -> Result<usize, StoreError> {
        log::info!("🎬 [DASHBOARD] Mounted, loading images");
        self.store.load().await.map(|images| images.len())
    }

    pub async fn upload(&self, file: UploadFile) -> Result<ImageRecord, StoreError> {
        self.store.upload(file).await
    }

    /// Delete by id; the URL sent to the service comes from the record.
    /// Unknown ids are a no-op.
    pub async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        match self.store.find(id) {
            Some(image) => self.store.delete(&image.id, &image.url).await,
            None => {
                log::debug!("ℹ️ [DASHBOARD] Delete of unknown image {} ignored", id);
                Ok(false)
            }
        }
    }

    /// Placeholder until image analysis exists
    pub fn analyze(&self, id: &str) -> Option<ImageRecord> {
        log::info!("🔍 [DASHBOARD] Analyzing image with id: {}", id);
        self.store.find(id)
    }

    pub fn toggle_theme(&self) -> Theme {
        self.theme.toggle()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }
}
