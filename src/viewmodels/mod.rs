pub mod session_guard;
pub mod dashboard_viewmodel;

pub use session_guard::SessionGuard;
pub use dashboard_viewmodel::{DashboardPhase, DashboardViewModel, UploadControl};
