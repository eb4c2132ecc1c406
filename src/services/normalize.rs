//! Turns validated requests into storage-ready input.
//!
//! Every string field is trimmed and the display color is resolved: an
//! explicit color wins, otherwise a default is picked from the entity's
//! categorical field.

use crate::models::experiences::ExperienceRequest;
use crate::models::profile::ProfileRequest;
use crate::models::projects::ProjectRequest;
use crate::models::publications::PublicationRequest;
use crate::models::skills::SkillRequest;

pub const DEFAULT_PROJECT_COLOR: &str = "cyan";
pub const DEFAULT_PUBLICATION_COLOR: &str = "red";

/// Default color for an experience type.
pub fn experience_color(kind: &str) -> &'static str {
    match kind {
        "work" => "cyan",
        "internship" => "pink",
        "campus" => "yellow",
        "competition" => "purple",
        _ => "gray",
    }
}

/// Default color for a skill level.
pub fn skill_color(level: &str) -> &'static str {
    match level {
        "advanced" => "black",
        "intermediate" => "gray",
        "beginner" => "white",
        _ => "gray",
    }
}

fn resolve_color(explicit: &str, fallback: &str) -> String {
    let explicit = explicit.trim();
    if explicit.is_empty() {
        fallback.to_string()
    } else {
        explicit.to_string()
    }
}

fn trim(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

pub fn profile(req: ProfileRequest) -> ProfileRequest {
    ProfileRequest {
        name: trim(req.name),
        title: trim(req.title),
        description: trim(req.description),
        photo_url: trim(req.photo_url),
        email: trim(req.email),
        linkedin_url: trim(req.linkedin_url),
        github_url: trim(req.github_url),
        cv_url: trim(req.cv_url),
    }
}

pub fn experience(req: ExperienceRequest) -> ExperienceRequest {
    let kind = trim(req.kind);
    let color = resolve_color(&req.color, experience_color(&kind));
    ExperienceRequest {
        title: trim(req.title),
        organization: trim(req.organization),
        period: trim(req.period),
        description: trim(req.description),
        kind,
        color,
    }
}

pub fn skill(req: SkillRequest) -> SkillRequest {
    let level = trim(req.level);
    let color = resolve_color(&req.color, skill_color(&level));
    SkillRequest {
        category: trim(req.category),
        name: trim(req.name),
        level,
        color,
    }
}

pub fn project(req: ProjectRequest) -> ProjectRequest {
    ProjectRequest {
        title: trim(req.title),
        description: trim(req.description),
        image_url: trim(req.image_url),
        project_url: trim(req.project_url),
        github_url: trim(req.github_url),
        tech_stack: trim(req.tech_stack),
        color: resolve_color(&req.color, DEFAULT_PROJECT_COLOR),
        profile_id: req.profile_id,
    }
}

pub fn publication(req: PublicationRequest) -> PublicationRequest {
    PublicationRequest {
        title: trim(req.title),
        authors: trim(req.authors),
        journal: trim(req.journal),
        year: req.year,
        description: trim(req.description),
        image_url: trim(req.image_url),
        publication_url: trim(req.publication_url),
        color: resolve_color(&req.color, DEFAULT_PUBLICATION_COLOR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("work", "cyan")]
    #[case("internship", "pink")]
    #[case("campus", "yellow")]
    #[case("competition", "purple")]
    #[case("volunteering", "gray")]
    fn experience_default_colors(#[case] kind: &str, #[case] color: &str) {
        let out = experience(ExperienceRequest {
            kind: kind.into(),
            ..Default::default()
        });
        assert_eq!(out.color, color);
    }

    #[rstest]
    #[case("advanced", "black")]
    #[case("intermediate", "gray")]
    #[case("beginner", "white")]
    #[case("", "gray")]
    fn skill_default_colors(#[case] level: &str, #[case] color: &str) {
        let out = skill(SkillRequest {
            level: level.into(),
            ..Default::default()
        });
        assert_eq!(out.color, color);
    }

    #[test]
    fn explicit_color_wins() {
        let out = experience(ExperienceRequest {
            kind: "work".into(),
            color: "lime".into(),
            ..Default::default()
        });
        assert_eq!(out.color, "lime");
    }

    #[test]
    fn lookup_uses_trimmed_category() {
        let out = skill(SkillRequest {
            level: "  advanced ".into(),
            ..Default::default()
        });
        assert_eq!(out.level, "advanced");
        assert_eq!(out.color, "black");
    }

    #[test]
    fn project_and_publication_fall_back_to_constants() {
        assert_eq!(project(ProjectRequest::default()).color, "cyan");
        assert_eq!(publication(PublicationRequest::default()).color, "red");
    }

    #[test]
    fn strings_are_trimmed() {
        let out = profile(ProfileRequest {
            name: "  John Doe ".into(),
            email: "\tjohn@example.com\n".into(),
            github_url: " https://github.com/john ".into(),
            ..Default::default()
        });
        assert_eq!(out.name, "John Doe");
        assert_eq!(out.email, "john@example.com");
        assert_eq!(out.github_url, "https://github.com/john");
    }
}
