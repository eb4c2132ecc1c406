pub mod contact;
pub mod experiences;
pub mod portfolio;
pub mod profile;
pub mod projects;
pub mod publications;
pub mod skills;
pub mod users;

use serde::Deserialize;

/// Optional `?success=` / `?error=` flags the admin pages show after a redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlashQuery {
    pub success: Option<String>,
    pub error: Option<String>,
}
