use crate::model::{FirstLesson, LearningPathItem, LearningPlan, Recommendation};

/// Deterministic stand-in plan served when the provider is quota-limited.
/// Always fully populated: five weeks, three practice questions, three
/// recommendations, all templated from the requested subject and level.
pub fn demo_plan(subject: &str, level: &str) -> LearningPlan {
    LearningPlan {
        learning_path: vec![
            LearningPathItem {
                week: 1,
                topic: format!("Introduction to {subject}"),
                hours: 3,
                description: format!("Foundational concepts and setup for {level} learners."),
            },
            LearningPathItem {
                week: 2,
                topic: format!("Core {subject} Fundamentals"),
                hours: 4,
                description: "Deep dive into essential building blocks.".to_string(),
            },
            LearningPathItem {
                week: 3,
                topic: format!("Practical {subject} Applications"),
                hours: 5,
                description: "Hands-on projects and real-world examples.".to_string(),
            },
            LearningPathItem {
                week: 4,
                topic: format!("Advanced {subject} Patterns"),
                hours: 4,
                description: "Best practices and professional techniques.".to_string(),
            },
            LearningPathItem {
                week: 5,
                topic: format!("{subject} Mastery Project"),
                hours: 6,
                description: "Build a complete project to solidify your skills.".to_string(),
            },
        ],
        first_lesson: FirstLesson {
            title: format!("Getting Started with {subject}"),
            explanation: format!(
                "Welcome to your {level} journey in {subject}! This lesson covers the \
                 fundamental concepts you'll need to build a strong foundation. We'll start \
                 with the basics and gradually work up to more complex topics."
            ),
            code_example: demo_code_example(subject),
            practice_questions: vec![
                format!("What is the main purpose of {subject}?"),
                format!("How would you describe {subject} to a beginner?"),
                format!("What are three real-world applications of {subject}?"),
            ],
        },
        recommendations: vec![
            Recommendation {
                topic: format!("{subject} Best Practices"),
                reason: "Helps you write cleaner, more maintainable code".to_string(),
            },
            Recommendation {
                topic: format!("{subject} Problem Solving"),
                reason: "Builds critical thinking skills essential for mastery".to_string(),
            },
            Recommendation {
                topic: format!("{subject} Projects Portfolio"),
                reason: "Apply your knowledge to real-world scenarios".to_string(),
            },
        ],
    }
}

// A starter snippet only makes sense for the two languages the lesson
// templates cover; everything else gets no code example.
fn demo_code_example(subject: &str) -> Option<String> {
    let lowered = subject.to_lowercase();
    if lowered.contains("python") {
        Some(format!(
            "# Your first Python program\nprint(\"Hello, {subject}!\")\n\n# Variables and data types\nname = \"ThreadMill Learner\"\nage = 25\nis_student = True"
        ))
    } else if lowered.contains("javascript") {
        Some(format!(
            "// Your first JavaScript program\nconsole.log(\"Hello, {subject}!\");\n\n// Variables and data types\nconst name = \"ThreadMill Learner\";\nlet age = 25;\nconst isStudent = true;"
        ))
    } else {
        None
    }
}
