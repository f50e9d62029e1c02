pub mod dashboard;
pub mod leave;

pub use dashboard::DashboardPage;
pub use leave::LeavePage;
