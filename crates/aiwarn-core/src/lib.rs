pub mod error;
pub mod types;

pub use error::{AiwarnError, AiwarnResult};
pub use types::{AiContentReport, Credit, PageMetadata};
