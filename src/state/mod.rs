// ============================================================================
// STATE MODULE - Shared state with Rc<RefCell> + change notifications
// ============================================================================

pub mod reactivity;
pub mod auth_state;
pub mod image_store;
pub mod theme_state;
pub mod app_state;

pub use reactivity::*;
pub use auth_state::*;
pub use image_store::{ImageStore, StoreEvent, StoreOperation};
pub use theme_state::*;
pub use app_state::*;
