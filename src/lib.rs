// FinScope - Core Library
// Region-localized financial literacy lessons, shared by the CLI and the API server

pub mod config;
pub mod error;
pub mod lesson;
pub mod locales;
pub mod localize;
pub mod logger;
pub mod region;
pub mod template;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::Settings;
pub use error::{LessonError, LessonResult};
pub use lesson::{educate, educate_with, LessonRequest, LessonResponse, LessonText};
pub use locales::{audit, FieldDefect, LocaleFields, RegionTable, TopicEntry};
pub use localize::{is_recognized_topic, resolve};
pub use region::RegionCode;
pub use template::{render, LessonTemplate};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
