use serde::{Deserialize, Serialize};

/// A complete generated learning plan. Wire field names are camelCase because
/// the frontend consumes this shape verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub learning_path: Vec<LearningPathItem>,
    pub first_lesson: FirstLesson,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPathItem {
    pub week: u32,
    pub topic: String,
    pub hours: u32,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstLesson {
    pub title: String,
    pub explanation: String,
    // The model sends null for non-programming subjects; the key may also be
    // missing entirely.
    #[serde(default)]
    pub code_example: Option<String>,
    pub practice_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: String,
    pub reason: String,
}
