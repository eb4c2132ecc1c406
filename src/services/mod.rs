pub mod auth;
pub mod contact;
pub mod content;
pub mod normalize;
pub mod portfolio;
pub mod validation;
