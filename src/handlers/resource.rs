//! Per-kind wiring shared by the JSON API and the admin panel.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tera::Context;

use crate::handlers::forms::FormFields;
use crate::models::experiences::{EXPERIENCE_TYPES, Experience, ExperienceRequest};
use crate::models::profile::{Profile, ProfileRequest};
use crate::models::projects::{Project, ProjectRequest};
use crate::models::publications::{Publication, PublicationRequest};
use crate::models::skills::{SKILL_LEVELS, Skill, SkillRequest};
use crate::services::content::Editable;
use crate::services::portfolio::group_skills;

pub trait Resource:
    Editable<Input: Clone + Default + Serialize + DeserializeOwned> + Serialize + 'static
{
    /// Singular label used in API messages, e.g. "Experience".
    const LABEL: &'static str;
    const PLURAL: &'static str;
    /// URL segment and template prefix, e.g. "experiences".
    const SLUG: &'static str;
    /// Upload subdirectory for kinds that carry an image.
    const IMAGE_DIR: Option<&'static str> = None;

    fn from_form(form: &FormFields) -> Self::Input;

    /// Image URL slot of the input, for kinds with [`Resource::IMAGE_DIR`].
    fn image_slot(_input: &mut Self::Input) -> Option<&mut String> {
        None
    }

    /// Add what the admin list template needs.
    fn list_context(items: Vec<Self>, ctx: &mut Context) {
        ctx.insert("items", &items);
    }

    /// Add choices the admin form template needs.
    fn form_context(_ctx: &mut Context) {}
}

impl Resource for Profile {
    const LABEL: &'static str = "Profile";
    const PLURAL: &'static str = "Profiles";
    const SLUG: &'static str = "profile";
    const IMAGE_DIR: Option<&'static str> = Some("profile");

    fn from_form(form: &FormFields) -> ProfileRequest {
        ProfileRequest {
            name: form.text("name"),
            title: form.text("title"),
            description: form.text("description"),
            photo_url: form.text("existing_photo"),
            email: form.text("email"),
            linkedin_url: form.text("linkedin_url"),
            github_url: form.text("github_url"),
            cv_url: form.text("cv_url"),
        }
    }

    fn image_slot(input: &mut ProfileRequest) -> Option<&mut String> {
        Some(&mut input.photo_url)
    }
}

impl Resource for Experience {
    const LABEL: &'static str = "Experience";
    const PLURAL: &'static str = "Experiences";
    const SLUG: &'static str = "experiences";

    fn from_form(form: &FormFields) -> ExperienceRequest {
        ExperienceRequest {
            title: form.text("title"),
            organization: form.text("organization"),
            period: form.text("period"),
            description: form.text("description"),
            kind: form.text("type"),
            color: form.text("color"),
        }
    }

    fn form_context(ctx: &mut Context) {
        ctx.insert("types", &EXPERIENCE_TYPES);
    }
}

impl Resource for Skill {
    const LABEL: &'static str = "Skill";
    const PLURAL: &'static str = "Skills";
    const SLUG: &'static str = "skills";

    fn from_form(form: &FormFields) -> SkillRequest {
        SkillRequest {
            category: form.text("category"),
            name: form.text("name"),
            level: form.text("level"),
            color: form.text("color"),
        }
    }

    fn list_context(items: Vec<Skill>, ctx: &mut Context) {
        ctx.insert("groups", &group_skills(items));
    }

    fn form_context(ctx: &mut Context) {
        ctx.insert("levels", &SKILL_LEVELS);
    }
}

impl Resource for Project {
    const LABEL: &'static str = "Project";
    const PLURAL: &'static str = "Projects";
    const SLUG: &'static str = "projects";
    const IMAGE_DIR: Option<&'static str> = Some("projects");

    fn from_form(form: &FormFields) -> ProjectRequest {
        ProjectRequest {
            title: form.text("title"),
            description: form.text("description"),
            image_url: form.text("existing_image"),
            project_url: form.text("project_url"),
            github_url: form.text("github_url"),
            tech_stack: form.text("tech_stack"),
            color: form.text("color"),
            profile_id: form.int("profile_id"),
        }
    }

    fn image_slot(input: &mut ProjectRequest) -> Option<&mut String> {
        Some(&mut input.image_url)
    }
}

impl Resource for Publication {
    const LABEL: &'static str = "Publication";
    const PLURAL: &'static str = "Publications";
    const SLUG: &'static str = "publications";
    const IMAGE_DIR: Option<&'static str> = Some("publications");

    fn from_form(form: &FormFields) -> PublicationRequest {
        PublicationRequest {
            title: form.text("title"),
            authors: form.text("authors"),
            journal: form.text("journal"),
            year: form.int("year"),
            description: form.text("description"),
            image_url: form.text("existing_image"),
            publication_url: form.text("publication_url"),
            color: form.text("color"),
        }
    }

    fn image_slot(input: &mut PublicationRequest) -> Option<&mut String> {
        Some(&mut input.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_form_reads_year_and_existing_image() {
        let form = FormFields::from_pairs(&[
            ("title", "Paper"),
            ("year", "2022"),
            ("existing_image", "/public/assets/publications/1_p.png"),
        ]);
        let mut input = Publication::from_form(&form);
        assert_eq!(input.year, 2022);
        assert_eq!(
            Publication::image_slot(&mut input).map(|s| s.as_str()),
            Some("/public/assets/publications/1_p.png")
        );
    }

    #[test]
    fn experience_form_maps_type_field() {
        let form = FormFields::from_pairs(&[("type", "campus")]);
        assert_eq!(Experience::from_form(&form).kind, "campus");
    }

    #[test]
    fn kinds_without_images_have_no_slot() {
        let mut input = SkillRequest::default();
        assert!(Skill::IMAGE_DIR.is_none());
        assert!(Skill::image_slot(&mut input).is_none());
    }
}
