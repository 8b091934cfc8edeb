//! Prompt templates for the company profile and the recommendations.

use crate::metrics::model::MetricsSummary;

/// Company profile prompt. `{company}` is replaced with the company name.
const PROFILE_TEMPLATE: &str = r##"Please build a short company profile for {company}. The profile should include the following sections in markdown:
- **Mission:** A brief mission statement.
- **Key Features:** List 3-5 key features of the company.
- **Values:** Describe the core values of the company.
- **Target Audience:** Describe who the company primarily serves.
- **Overall Summary:** Provide an overall summary of what the company does."##;

/// Sections requested from the recommendation model.
const RECOMMENDATION_SECTIONS: &str = r##"Please provide a detailed analysis in markdown with the following sections.

### 📈 Productivity Analysis
Evaluate the current workspace structure and workflow. Provide insights on how to optimize productivity by leveraging the workspace metrics above and tailoring strategies to the specified use case.

### ✅ Actionable Recommendations
Suggest practical steps to improve efficiency and organization, addressing specific challenges highlighted by the workspace data and the unique requirements of the use case, along with considerations from the company profile.

### 🏆 Best Practices & Tips
Share industry-specific best practices and tips that can help maximize workflow efficiency for a company with this use case.

### 🛠️ Useful ClickUp Templates & Resources
Recommend relevant ClickUp templates and resources. Provide hyperlinks to useful resources on clickup.com, university.clickup.com, or help.clickup.com. Provide 5-8 links."##;

const NO_WORKSPACE_DATA: &str = "(No workspace data available)";
const NO_PROFILE: &str = "(No company profile available)";
const NO_USE_CASE: &str = "(No use case provided)";

/// Build the company profile prompt.
pub fn profile_prompt(company_name: &str) -> String {
    PROFILE_TEMPLATE.replace("{company}", company_name.trim())
}

/// Build the recommendation prompt from whichever inputs are present.
pub fn recommendation_prompt(
    metrics: Option<&MetricsSummary>,
    profile: Option<&str>,
    use_case: &str,
) -> String {
    let workspace = metrics
        .map(MetricsSummary::to_markdown)
        .unwrap_or_else(|| NO_WORKSPACE_DATA.to_string());
    let profile = profile
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(NO_PROFILE);
    let use_case = match use_case.trim() {
        "" => NO_USE_CASE.to_string(),
        text => format!("\"{}\"", text),
    };

    format!(
        "Based on the following workspace data:\n{}\n\n\
         Considering the company's use case: {}\n\n\
         And the following company profile:\n{}\n\n{}",
        workspace, use_case, profile, RECOMMENDATION_SECTIONS
    )
}
