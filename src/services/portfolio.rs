//! Assembles the full portfolio for the public page and the dashboard.
//!
//! The five sections load concurrently. A section that fails to load is
//! replaced by its empty value and recorded in [`PortfolioData::degraded`],
//! so the page still renders when part of the store is unavailable.

use sea_orm::{DatabaseConnection, DbErr};

use crate::db::repository;
use crate::db::profile as profile_db;
use crate::models::experiences::Experience;
use crate::models::portfolio::{DashboardStats, PortfolioData, SkillGroups};
use crate::models::profile::Profile;
use crate::models::projects::Project;
use crate::models::publications::Publication;
use crate::models::skills::Skill;

pub async fn get_portfolio_data(db: &DatabaseConnection) -> PortfolioData {
    let (profile, experiences, skills, projects, publications) = futures_util::join!(
        profile_db::get_profile(db),
        repository::get_all::<Experience>(db),
        repository::get_all::<Skill>(db),
        repository::get_all::<Project>(db),
        repository::get_all::<Publication>(db),
    );
    assemble(profile, experiences, skills, projects, publications)
}

/// Collects the names of sections replaced by empty values.
#[derive(Default)]
struct Sections {
    degraded: Vec<&'static str>,
}

impl Sections {
    fn resolve<T: Default>(&mut self, name: &'static str, result: Result<T, DbErr>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(section = name, error = %e, "portfolio section unavailable");
                self.degraded.push(name);
                T::default()
            }
        }
    }
}

fn assemble(
    profile: Result<Option<Profile>, DbErr>,
    experiences: Result<Vec<Experience>, DbErr>,
    skills: Result<Vec<Skill>, DbErr>,
    projects: Result<Vec<Project>, DbErr>,
    publications: Result<Vec<Publication>, DbErr>,
) -> PortfolioData {
    let mut sections = Sections::default();
    let profile = sections.resolve("profile", profile).unwrap_or_default();
    let experiences = sections.resolve("experiences", experiences);
    let skills = group_skills(sections.resolve("skills", skills));
    let projects = sections.resolve("projects", projects);
    let publications = sections.resolve("publications", publications);

    PortfolioData {
        profile,
        experiences,
        skills,
        projects,
        publications,
        degraded: sections.degraded,
    }
}

/// Group skills by category, keeping the incoming order inside each group.
pub fn group_skills(skills: Vec<Skill>) -> SkillGroups {
    let mut groups = SkillGroups::new();
    for skill in skills {
        groups.entry(skill.category.clone()).or_default().push(skill);
    }
    groups
}

pub fn dashboard_stats(data: &PortfolioData) -> DashboardStats {
    DashboardStats {
        experiences: data.experiences.len(),
        skills: data.skills.values().map(Vec::len).sum(),
        projects: data.projects.len(),
        publications: data.publications.len(),
    }
}
