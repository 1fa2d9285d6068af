//! Fixed prompt templates for the four brief sections.

use crate::prep::MeetingRequest;

fn focus_areas(request: &MeetingRequest) -> &str {
    if request.focus_areas.is_empty() {
        "None specified"
    } else {
        &request.focus_areas
    }
}

/// Prompt for the company context section, grounded on the company search results.
pub fn build_company_analysis_prompt(request: &MeetingRequest, company_info: &str) -> String {
    format!(
        "Please analyze the following information about {company}:\n\
\n\
Company Information:\n\
{company_info}\n\
\n\
Meeting Context:\n\
- Objective: {objective}\n\
- Attendees: {attendees}\n\
- Duration: {duration} minutes\n\
- Focus Areas: {focus}\n\
\n\
Provide a concise company analysis focusing on recent news, products, and relevant background information.\n\
Format your response in Markdown.",
        company = request.company_name,
        objective = request.objective,
        attendees = request.attendees,
        duration = request.duration_minutes,
        focus = focus_areas(request),
    )
}

/// Prompt for the industry section, grounded on the industry search results.
pub fn build_industry_analysis_prompt(request: &MeetingRequest, industry_info: &str) -> String {
    format!(
        "Based on this information about {company} and its industry:\n\
\n\
{industry_info}\n\
\n\
Provide a brief industry analysis including:\n\
1. Key industry trends\n\
2. Top competitors\n\
3. Market opportunities\n\
\n\
Keep it very concise and use Markdown format.",
        company = request.company_name,
    )
}

/// Prompt for the time-boxed agenda.
pub fn build_strategy_prompt(request: &MeetingRequest) -> String {
    format!(
        "Create a brief {duration}-minute agenda for a meeting with {company}:\n\
\n\
Meeting Context:\n\
- Objective: {objective}\n\
- Attendees: {attendees}\n\
- Focus Areas: {focus}\n\
\n\
Include:\n\
1. 3-4 time-boxed sections\n\
2. Key talking points for each section\n\
3. Who should lead each section\n\
\n\
Keep it concise and use Markdown format.",
        duration = request.duration_minutes,
        company = request.company_name,
        objective = request.objective,
        attendees = request.attendees,
        focus = focus_areas(request),
    )
}

/// Prompt for the executive summary.
pub fn build_brief_prompt(request: &MeetingRequest) -> String {
    format!(
        "Create a brief executive summary for the meeting with {company}:\n\
\n\
Meeting Context:\n\
- Objective: {objective}\n\
- Attendees: {attendees}\n\
- Focus Areas: {focus}\n\
\n\
Include:\n\
1. Brief summary (2-3 sentences)\n\
2. 3 key points to remember\n\
3. 2 recommended actions\n\
\n\
Be very concise and use Markdown format.",
        company = request.company_name,
        objective = request.objective,
        attendees = request.attendees,
        focus = focus_areas(request),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> MeetingRequest {
        MeetingRequest {
            company_name: "Acme".to_string(),
            objective: "Close the pilot".to_string(),
            attendees: "Jane (CTO)".to_string(),
            duration_minutes: 45,
            focus_areas: "pricing, security".to_string(),
        }
    }

    #[test]
    fn company_prompt_carries_all_context() {
        let prompt = build_company_analysis_prompt(&request(), "Acme is a widget maker");
        assert!(prompt.starts_with("Please analyze the following information about Acme:"));
        assert!(prompt.contains("Company Information:\nAcme is a widget maker\n"));
        assert!(prompt.contains("- Objective: Close the pilot"));
        assert!(prompt.contains("- Attendees: Jane (CTO)"));
        assert!(prompt.contains("- Duration: 45 minutes"));
        assert!(prompt.contains("- Focus Areas: pricing, security"));
        assert!(prompt.ends_with("Format your response in Markdown."));
    }

    #[test]
    fn industry_prompt_only_uses_company_and_results() {
        let prompt = build_industry_analysis_prompt(&request(), "Widgets are booming");
        assert!(prompt.contains("about Acme and its industry"));
        assert!(prompt.contains("\nWidgets are booming\n"));
        assert!(!prompt.contains("Close the pilot"));
        assert!(prompt.contains("Markdown"));
    }

    #[test]
    fn strategy_prompt_is_time_boxed_to_duration() {
        let prompt = build_strategy_prompt(&request());
        assert!(prompt.starts_with("Create a brief 45-minute agenda for a meeting with Acme:"));
        assert!(prompt.contains("- Focus Areas: pricing, security"));
    }

    #[test]
    fn empty_focus_areas_render_placeholder() {
        let mut request = request();
        request.focus_areas.clear();

        let prompt = build_brief_prompt(&request);
        assert!(prompt.contains("- Focus Areas: None specified"));
        assert!(!prompt.contains("Duration"));
    }

    #[test]
    fn templates_are_deterministic() {
        assert_eq!(build_strategy_prompt(&request()), build_strategy_prompt(&request()));
    }
}
