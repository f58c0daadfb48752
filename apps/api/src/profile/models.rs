use serde::Deserialize;

/// Raw form submission as posted by the UI.
///
/// Missing fields deserialize to empty strings so the validator can report
/// them with the same messages as blank ones.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub job_title: String,
    pub company: String,
    pub experience: String,
    /// Comma-separated.
    pub skills: String,
    pub education: String,
    pub linkedin_url: Option<String>,
}

/// A profile that passed validation. Fields are trimmed; only
/// `validation::validate` constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicantProfile {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) phone: String,
    pub(super) job_title: String,
    pub(super) company: String,
    pub(super) experience: String,
    pub(super) skills: String,
    pub(super) education: String,
    pub(super) linkedin_url: Option<String>,
}

impl ApplicantProfile {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn experience(&self) -> &str {
        &self.experience
    }

    /// The skills field exactly as submitted (trimmed), commas included.
    pub fn skills(&self) -> &str {
        &self.skills
    }

    /// Individual skills: split on commas, trimmed, blanks dropped.
    pub fn skills_list(&self) -> Vec<&str> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    /// `None` when the applicant left the field blank.
    pub fn linkedin_url(&self) -> Option<&str> {
        self.linkedin_url.as_deref()
    }
}
