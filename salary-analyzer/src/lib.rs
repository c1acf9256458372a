pub mod aggregator;
pub mod api;
pub mod estimator;
pub mod models;

pub use aggregator::aggregate;
pub use api::{SalaryEstimate, VacancySource};
pub use estimator::predict_salary;
pub use models::{LanguageStats, Listing, Page, StatisticsTable};
