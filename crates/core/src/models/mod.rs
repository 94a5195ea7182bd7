pub mod allocation;
pub mod chart;
pub mod dashboard;
pub mod insight;
pub mod navigation;
pub mod news;
pub mod quote;
pub mod settings;
pub mod trend;
