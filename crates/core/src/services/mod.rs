pub mod dashboard_service;
pub mod refresh_service;
pub mod series_generator;
