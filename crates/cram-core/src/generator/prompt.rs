//! Instruction text sent to the generative model.

use std::fmt::Write;

use jiff::civil::Date;

use crate::models::StudyRequest;

/// Builds the generation instruction for `request`.
///
/// Topics, test date and comfort level are embedded verbatim; `today` anchors
/// the first day of the schedule.
pub fn build_prompt(request: &StudyRequest, today: Date) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(
        "You are an AI-powered study planner. A user needs a study plan for an upcoming test.\n\n",
    );

    prompt.push_str("Key Information:\n");
    let _ = writeln!(prompt, "- Test Topics: \"{}\"", request.topics());
    let _ = writeln!(prompt, "- Test Date: \"{}\"", request.test_date());
    let _ = writeln!(
        prompt,
        "- User's Comfort Level: \"{}\"",
        request.comfort_level().as_str()
    );
    let _ = writeln!(prompt, "- Today's Date: \"{today}\"");
    prompt.push('\n');

    prompt.push_str(
        "Your task is to generate a comprehensive, week-by-week, day-by-day study plan that \
         starts from today and ends the day before the test date.\n\n",
    );

    prompt.push_str(INSTRUCTIONS);
    prompt.push('\n');
    prompt.push_str(
        "Your entire response MUST be a single JSON object that strictly follows the provided \
         schema. Do not include any text, markdown, or explanations outside of the JSON object.\n",
    );

    prompt
}

const INSTRUCTIONS: &str = r#"Instructions:
1. Create a schedule that intelligently allocates time based on the user's comfort level. If they are a 'Beginner', start with fundamentals. If 'Advanced', focus on complex topics and review. For 'Intermediate', balance review with new material.
2. Break down the topics into manageable daily tasks. Each task must be specific and actionable.
3. For each week, provide a high-level theme or goal and number the weeks starting from 1.
4. For each day, provide a clear date string as its label (e.g., "Monday, October 28").
5. For each daily task, provide a concise task title and a one-sentence description.
6. Include review days and a final "cram session" or "final review" day right before the test date. Do not schedule any tasks on the test date itself.
"#;

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{models::ComfortLevel, params::StudyForm};

    fn request(comfort_level: ComfortLevel) -> StudyRequest {
        StudyForm {
            topics: "Graph algorithms, \"dynamic\" programming".to_string(),
            test_date: "2026-11-16".to_string(),
            comfort_level,
        }
        .validate(date(2026, 10, 19))
        .unwrap()
    }

    #[test]
    fn test_prompt_embeds_request_verbatim() {
        let prompt = build_prompt(&request(ComfortLevel::Advanced), date(2026, 10, 19));

        assert!(prompt.contains("Test Topics: \"Graph algorithms, \"dynamic\" programming\""));
        assert!(prompt.contains("Test Date: \"2026-11-16\""));
        assert!(prompt.contains("Comfort Level: \"Advanced\""));
        assert!(prompt.contains("Today's Date: \"2026-10-19\""));
    }

    #[test]
    fn test_prompt_states_scheduling_rules() {
        let prompt = build_prompt(&request(ComfortLevel::Beginner), date(2026, 10, 19));

        assert!(prompt.contains("ends the day before the test date"));
        assert!(prompt.contains("'Beginner', start with fundamentals"));
        assert!(prompt.contains("Do not schedule any tasks on the test date itself"));
        assert!(prompt.contains("strictly follows the provided schema"));
    }
}
