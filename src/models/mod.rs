pub mod api;
pub mod image;
pub mod session;
pub mod theme;

pub use api::{DeleteRequest, ImagesResponse, RemoteImage, UploadResponse};
pub use image::{ImageRecord, UploadFile};
pub use session::{Credential, SessionState};
pub use theme::Theme;
