use once_cell::sync::Lazy;
use regex::Regex;

use crate::profile::models::{ApplicantProfile, ProfileForm};

pub const FULL_NAME_REQUIRED: &str = "Full Name is required.";
pub const EMAIL_INVALID: &str = "Valid Email is required.";
pub const PHONE_INVALID: &str = "Phone Number must be 10 digits.";
pub const JOB_TITLE_REQUIRED: &str = "Job Title is required.";
pub const COMPANY_REQUIRED: &str = "Company Name is required.";
pub const EXPERIENCE_REQUIRED: &str = "Experience is required.";
pub const SKILLS_REQUIRED: &str = "Skills are required.";
pub const EDUCATION_REQUIRED: &str = "Education Background is required.";
pub const LINKEDIN_INVALID: &str = "LinkedIn URL must start with https://linkedin.com/...";

/// `local@domain.tld`: an `@` after a non-empty local part, a dot later on
/// with characters on both sides, no whitespace anywhere. Anything after
/// the first `.tld` run is accepted, further `@`s included.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.\S+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

static LINKEDIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/.*").expect("linkedin pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Blank means "not provided" and is accepted.
pub fn is_valid_linkedin(url: &str) -> bool {
    url.is_empty() || LINKEDIN_PATTERN.is_match(url)
}

/// Validates a form submission.
///
/// Every rule runs; the error list holds one message per violated rule, in
/// form order. On success text fields are stored trimmed and a blank
/// LinkedIn URL becomes `None`. The phone number is checked as submitted,
/// so surrounding whitespace fails the 10-digit rule.
pub fn validate(form: &ProfileForm) -> Result<ApplicantProfile, Vec<String>> {
    let full_name = form.full_name.trim();
    let email = form.email.trim();
    let phone = form.phone.as_str();
    let job_title = form.job_title.trim();
    let company = form.company.trim();
    let experience = form.experience.trim();
    let skills = form.skills.trim();
    let education = form.education.trim();
    let linkedin_url = form.linkedin_url.as_deref().map(str::trim).unwrap_or("");

    let mut errors = Vec::new();

    if full_name.is_empty() {
        errors.push(FULL_NAME_REQUIRED.to_string());
    }
    if email.is_empty() || !is_valid_email(email) {
        errors.push(EMAIL_INVALID.to_string());
    }
    if !is_valid_phone(phone) {
        errors.push(PHONE_INVALID.to_string());
    }
    if job_title.is_empty() {
        errors.push(JOB_TITLE_REQUIRED.to_string());
    }
    if company.is_empty() {
        errors.push(COMPANY_REQUIRED.to_string());
    }
    if experience.is_empty() {
        errors.push(EXPERIENCE_REQUIRED.to_string());
    }
    if skills.is_empty() {
        errors.push(SKILLS_REQUIRED.to_string());
    }
    if education.is_empty() {
        errors.push(EDUCATION_REQUIRED.to_string());
    }
    if !is_valid_linkedin(linkedin_url) {
        errors.push(LINKEDIN_INVALID.to_string());
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ApplicantProfile {
        name: full_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        job_title: job_title.to_string(),
        company: company.to_string(),
        experience: experience.to_string(),
        skills: skills.to_string(),
        education: education.to_string(),
        linkedin_url: (!linkedin_url.is_empty()).then(|| linkedin_url.to_string()),
    })
}
