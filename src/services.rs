pub mod auth;
pub mod attendance_service;
pub mod dashboard_service;
pub mod document_service;
pub mod feedback_service;
pub mod logistics_service;
pub mod penalty_service;
pub mod report_service;
pub mod task_service;
pub mod vehicle_service;
