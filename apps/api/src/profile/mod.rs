// Applicant profile intake: the wire form, the validated profile, and the
// validation gate that sits between them. Nothing downstream sees a
// `ProfileForm`; generation only ever receives an `ApplicantProfile`.

pub mod models;
pub mod validation;

pub use models::{ApplicantProfile, ProfileForm};
pub use validation::validate;
