// Prompt templates for document generation.
// Templates are filled by plain placeholder replacement; every profile field
// appears as a `Label: value` line so the model sees the same block in both.

use crate::profile::ApplicantProfile;

/// Rendered in place of a LinkedIn URL the applicant did not provide.
pub const LINKEDIN_PLACEHOLDER: &str = "N/A";

/// Resume prompt. Replace `{profile_block}` before sending.
pub const RESUME_PROMPT_TEMPLATE: &str = r#"
Write a professional and complete resume in markdown format using the following details:

{profile_block}

The resume should include:
- Header with name and contact
- Objective for job role at the company
- Education
- Experience
- Skills
"#;

/// Cover letter prompt. Replace `{profile_block}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"
Write a formal, enthusiastic cover letter in markdown format using these details:

{profile_block}

Make it personalized, 3 paragraphs, ending with a strong closing.
"#;

pub fn build_resume_prompt(profile: &ApplicantProfile) -> String {
    RESUME_PROMPT_TEMPLATE.replace("{profile_block}", &profile_block(profile))
}

pub fn build_cover_letter_prompt(profile: &ApplicantProfile) -> String {
    COVER_LETTER_PROMPT_TEMPLATE.replace("{profile_block}", &profile_block(profile))
}

fn profile_block(profile: &ApplicantProfile) -> String {
    let linkedin = profile.linkedin_url().unwrap_or(LINKEDIN_PLACEHOLDER);
    [
        ("Full Name", profile.name()),
        ("Email", profile.email()),
        ("Phone", profile.phone()),
        ("Job Title", profile.job_title()),
        ("Company", profile.company()),
        ("Experience", profile.experience()),
        ("Skills", profile.skills()),
        ("Education", profile.education()),
        ("LinkedIn", linkedin),
    ]
    .iter()
    .map(|(label, value)| format!("{label}: {value}"))
    .collect::<Vec<_>>()
    .join("\n")
}
