//! Request validation.
//!
//! One function per request kind. Each returns the first rule the input
//! violates; later rules are not evaluated. Whitespace-only strings count as
//! empty, and lengths are measured in characters.

use std::fmt;

use crate::models::contact::ContactRequest;
use crate::models::experiences::{EXPERIENCE_TYPES, ExperienceRequest};
use crate::models::profile::ProfileRequest;
use crate::models::projects::ProjectRequest;
use crate::models::publications::PublicationRequest;
use crate::models::skills::{SKILL_LEVELS, SkillRequest};
use crate::models::users::{LoginRequest, RegisterRequest};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(String);

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ValidationError {}

type Outcome = Result<(), ValidationError>;

fn required(value: &str, field: &str) -> Outcome {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!("{field} is required")));
    }
    Ok(())
}

fn bounded(value: &str, field: &str, max: usize) -> Outcome {
    required(value, field)?;
    if value.trim().chars().count() > max {
        return Err(ValidationError::new(format!(
            "{field} must be less than {max} characters"
        )));
    }
    Ok(())
}

pub fn validate_profile(req: &ProfileRequest) -> Outcome {
    bounded(&req.name, "name", 100)?;
    bounded(&req.email, "email", 100)
}

pub fn validate_experience(req: &ExperienceRequest) -> Outcome {
    bounded(&req.title, "title", 200)?;
    bounded(&req.organization, "organization", 200)?;
    if !EXPERIENCE_TYPES.contains(&req.kind.trim()) {
        return Err(ValidationError::new(format!(
            "type must be one of: {}",
            EXPERIENCE_TYPES.join(", ")
        )));
    }
    Ok(())
}

pub fn validate_skill(req: &SkillRequest) -> Outcome {
    bounded(&req.category, "category", 100)?;
    bounded(&req.name, "name", 100)?;
    let level = req.level.trim();
    if !level.is_empty() && !SKILL_LEVELS.contains(&level) {
        return Err(ValidationError::new(format!(
            "level must be one of: {}",
            SKILL_LEVELS.join(", ")
        )));
    }
    Ok(())
}

pub fn validate_project(req: &ProjectRequest) -> Outcome {
    bounded(&req.title, "title", 200)
}

pub fn validate_publication(req: &PublicationRequest) -> Outcome {
    bounded(&req.title, "title", 200)?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&req.year) {
        return Err(ValidationError::new(format!(
            "year must be between {MIN_YEAR} and {MAX_YEAR}"
        )));
    }
    Ok(())
}

pub fn validate_contact(req: &ContactRequest) -> Outcome {
    required(&req.name, "name")?;
    required(&req.email, "email")?;
    required(&req.message, "message")
}

pub fn validate_login(req: &LoginRequest) -> Outcome {
    required(&req.email, "email")?;
    if req.password.is_empty() {
        return Err(ValidationError::new("password is required"));
    }
    Ok(())
}

pub fn validate_register(req: &RegisterRequest) -> Outcome {
    required(&req.email, "email")?;
    if req.password.is_empty() {
        return Err(ValidationError::new("password is required"));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    required(&req.name, "name")
}

pub fn validate_id(id: i32) -> Outcome {
    if id <= 0 {
        return Err(ValidationError::new("invalid ID"));
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Outcome {
    required(category, "category")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn experience(kind: &str) -> ExperienceRequest {
        ExperienceRequest {
            title: "Backend Engineer".into(),
            organization: "Acme".into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    fn skill(level: &str) -> SkillRequest {
        SkillRequest {
            category: "Languages".into(),
            name: "Rust".into(),
            level: level.into(),
            ..Default::default()
        }
    }

    fn publication(year: i32) -> PublicationRequest {
        PublicationRequest {
            title: "On Things".into(),
            year,
            ..Default::default()
        }
    }

    #[rstest]
    #[case("work")]
    #[case("internship")]
    #[case("campus")]
    #[case("competition")]
    fn experience_accepts_known_types(#[case] kind: &str) {
        assert!(validate_experience(&experience(kind)).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("job")]
    #[case("Work")]
    fn experience_rejects_other_types(#[case] kind: &str) {
        let err = validate_experience(&experience(kind)).unwrap_err();
        assert_eq!(
            err.message(),
            "type must be one of: work, internship, campus, competition"
        );
    }

    #[test]
    fn experience_reports_first_failure_only() {
        let req = ExperienceRequest {
            kind: "nope".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_experience(&req).unwrap_err().message(),
            "title is required"
        );
    }

    #[test]
    fn experience_title_length_is_bounded() {
        let mut req = experience("work");
        req.title = "x".repeat(200);
        assert!(validate_experience(&req).is_ok());
        req.title = "x".repeat(201);
        assert_eq!(
            validate_experience(&req).unwrap_err().message(),
            "title must be less than 200 characters"
        );
    }

    #[rstest]
    #[case("")]
    #[case("beginner")]
    #[case("intermediate")]
    #[case("advanced")]
    fn skill_accepts_empty_or_known_level(#[case] level: &str) {
        assert!(validate_skill(&skill(level)).is_ok());
    }

    #[rstest]
    #[case("expert")]
    #[case("ADVANCED")]
    fn skill_rejects_unknown_level(#[case] level: &str) {
        assert_eq!(
            validate_skill(&skill(level)).unwrap_err().message(),
            "level must be one of: beginner, intermediate, advanced"
        );
    }

    #[rstest]
    #[case(1900, true)]
    #[case(2100, true)]
    #[case(2024, true)]
    #[case(1899, false)]
    #[case(2101, false)]
    #[case(0, false)]
    fn publication_year_bounds(#[case] year: i32, #[case] ok: bool) {
        let result = validate_publication(&publication(year));
        assert_eq!(result.is_ok(), ok, "year {year}");
        if !ok {
            assert_eq!(
                result.unwrap_err().message(),
                "year must be between 1900 and 2100"
            );
        }
    }

    #[test]
    fn profile_requires_name_then_email() {
        let mut req = ProfileRequest {
            email: "john@example.com".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_profile(&req).unwrap_err().message(),
            "name is required"
        );

        req.name = "   ".into();
        assert_eq!(
            validate_profile(&req).unwrap_err().message(),
            "name is required"
        );

        req.name = "John Doe".into();
        req.email.clear();
        assert_eq!(
            validate_profile(&req).unwrap_err().message(),
            "email is required"
        );

        req.email = format!("{}@example.com", "a".repeat(100));
        assert_eq!(
            validate_profile(&req).unwrap_err().message(),
            "email must be less than 100 characters"
        );
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let req = ProfileRequest {
            name: "é".repeat(100),
            email: "a@b.co".into(),
            ..Default::default()
        };
        assert!(validate_profile(&req).is_ok());
    }

    #[test]
    fn contact_subject_is_optional() {
        let mut req = ContactRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            subject: String::new(),
            message: "Hello".into(),
        };
        assert!(validate_contact(&req).is_ok());

        req.message = " ".into();
        assert_eq!(
            validate_contact(&req).unwrap_err().message(),
            "message is required"
        );
    }

    #[test]
    fn register_enforces_password_length() {
        let req = RegisterRequest {
            email: "admin@example.com".into(),
            password: "12345".into(),
            name: "Admin".into(),
        };
        assert_eq!(
            validate_register(&req).unwrap_err().message(),
            "password must be at least 6 characters"
        );
    }

    #[test]
    fn ids_must_be_positive() {
        assert!(validate_id(1).is_ok());
        assert_eq!(validate_id(0).unwrap_err().message(), "invalid ID");
        assert!(validate_id(-4).is_err());
    }
}
