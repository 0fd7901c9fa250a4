pub mod alerts;
pub mod dashboard;
pub mod recommendations;

pub use alerts::AlertsScreen;
pub use dashboard::DashboardScreen;
pub use recommendations::RecommendationsScreen;
