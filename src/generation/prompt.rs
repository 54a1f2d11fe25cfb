/// Build the instruction sent to the model. The JSON skeleton is spelled out
/// field by field, with example rows, because the reply is fed straight into
/// the parser; the model is told to skip markdown fences (it often ignores
/// that, which is why the parser strips them anyway).
pub fn build_learning_path_prompt(subject: &str, level: &str) -> String {
    format!(
        r#"You are an expert educational AI. Create a personalized learning path for {subject} at {level} level.

Return your response in the following JSON format ONLY (no markdown, no code blocks, just raw JSON):
{{
  "learningPath": [
    {{"week": 1, "topic": "Topic Name", "hours": 3, "description": "Brief description"}},
    {{"week": 2, "topic": "Topic Name", "hours": 4, "description": "Brief description"}},
    {{"week": 3, "topic": "Topic Name", "hours": 5, "description": "Brief description"}},
    {{"week": 4, "topic": "Topic Name", "hours": 4, "description": "Brief description"}},
    {{"week": 5, "topic": "Topic Name", "hours": 6, "description": "Brief description"}}
  ],
  "firstLesson": {{
    "title": "Lesson Title",
    "explanation": "2-3 sentence concept explanation tailored for {level} level",
    "codeExample": "// Code example if programming subject, otherwise null",
    "practiceQuestions": [
      "Question 1?",
      "Question 2?",
      "Question 3?"
    ]
  }},
  "recommendations": [
    {{"topic": "Related Topic 1", "reason": "Why this helps"}},
    {{"topic": "Related Topic 2", "reason": "Why this helps"}},
    {{"topic": "Related Topic 3", "reason": "Why this helps"}}
  ]
}}

Make the content genuinely educational and appropriate for {level} level. For programming subjects, include real code examples."#
    )
}
