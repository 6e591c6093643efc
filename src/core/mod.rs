pub mod aggregate;
pub mod etl;
pub mod pipeline;
pub mod render;
pub mod report;

pub use crate::domain::model::{CustomerRecord, PackageSummary, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SeederSettings, Storage};
pub use crate::utils::error::Result;
