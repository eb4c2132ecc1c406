use serde::Serialize;
use std::collections::BTreeMap;

use super::experiences::Experience;
use super::profile::Profile;
use super::projects::Project;
use super::publications::Publication;
use super::skills::Skill;

/// Skills keyed by category. Categories iterate in ascending order.
pub type SkillGroups = BTreeMap<String, Vec<Skill>>;

/// Everything the public page needs, assembled in one pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PortfolioData {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub skills: SkillGroups,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    /// Sections that could not be loaded and were replaced by empty values.
    #[serde(skip)]
    pub degraded: Vec<&'static str>,
}

impl PortfolioData {
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }
}

/// Item counts shown on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub experiences: usize,
    pub skills: usize,
    pub projects: usize,
    pub publications: usize,
}
