pub mod aggregate;
pub mod columns;
pub mod engine;
pub mod extraction;
pub mod interests;
pub mod pipeline;
pub mod scoring;

pub use crate::domain::model::{MatchReport, SurveyData, Table};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
