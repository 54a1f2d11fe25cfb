pub mod plan;

pub use plan::{FirstLesson, LearningPathItem, LearningPlan, Recommendation};
