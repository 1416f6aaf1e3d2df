pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod normalize;
pub mod server;
pub mod utils;

pub use config::Config;
pub use error::{ApiError, ExtractError};
pub use extractor::TextExtractor;
pub use models::{DocumentFormat, UploadedFile};
pub use normalize::clean_text;
pub use server::router;
