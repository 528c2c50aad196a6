pub mod args;
pub mod cache;
pub mod dashboard;
pub mod error;
pub mod handicap;
pub mod model;
pub mod service;
pub mod storage;

pub use error::HandicapError;
pub use model::{Dashboard, PlayerId, RoundWithCourse};
pub use service::HandicapService;
pub use storage::{JsonRoundStore, RoundQuery, RoundStore, StorageError};
