pub mod app;
pub mod login;
pub mod header;
pub mod dashboard;
pub mod upload_card;
pub mod image_card;
pub mod loader;

pub use app::render_app;
pub use login::render_login;
pub use header::render_header;
pub use dashboard::render_dashboard;
pub use upload_card::render_upload_card;
pub use image_card::render_image_card;
pub use loader::render_loader;
