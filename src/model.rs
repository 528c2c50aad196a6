pub mod course;
pub mod dashboard;
pub mod differential;
pub mod player;
pub mod round;

pub use course::Course;
pub use dashboard::{ComparisonRow, Dashboard, ExportDocument, RoundListingRow};
pub use differential::{
    DifferentialSource, EffectiveDifferential, IndexPoint, IndexResult, RecentStats,
};
pub use player::{Player, PlayerId};
pub use round::{Round, RoundWithCourse};
