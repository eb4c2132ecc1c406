//! Tera templates for the public site and the admin panel.
//!
//! Templates are compiled into the binary and registered once at startup.

use std::collections::HashMap;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera, Value};

const TEMPLATES: [(&str, &str); 17] = [
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("login.html", include_str!("../templates/login.html")),
    ("logout.html", include_str!("../templates/logout.html")),
    ("page401.html", include_str!("../templates/page401.html")),
    ("admin/base.html", include_str!("../templates/admin/base.html")),
    ("admin/dashboard.html", include_str!("../templates/admin/dashboard.html")),
    ("admin/profile_form.html", include_str!("../templates/admin/profile_form.html")),
    ("admin/experiences_list.html", include_str!("../templates/admin/experiences_list.html")),
    ("admin/experiences_form.html", include_str!("../templates/admin/experiences_form.html")),
    ("admin/skills_list.html", include_str!("../templates/admin/skills_list.html")),
    ("admin/skills_form.html", include_str!("../templates/admin/skills_form.html")),
    ("admin/projects_list.html", include_str!("../templates/admin/projects_list.html")),
    ("admin/projects_form.html", include_str!("../templates/admin/projects_form.html")),
    ("admin/publications_list.html", include_str!("../templates/admin/publications_list.html")),
    ("admin/publications_form.html", include_str!("../templates/admin/publications_form.html")),
    ("admin/flash.html", include_str!("../templates/admin/flash.html")),
];

pub fn build() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES)?;
    tera.register_filter("color_class", color_class);
    tera.register_filter("color_class_light", color_class_light);
    tera.register_filter("format_year", format_year);
    // Replaces Tera's built-in `split`: entries are trimmed and empties dropped.
    tera.register_filter("split", split);
    Ok(tera)
}

pub fn render(tera: &Tera, name: &str, ctx: &Context) -> HttpResponse {
    render_with_status(tera, name, ctx, StatusCode::OK)
}

pub fn render_with_status(tera: &Tera, name: &str, ctx: &Context, status: StatusCode) -> HttpResponse {
    match tera.render(name, ctx) {
        Ok(html) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::error!(template = name, error = ?e, "failed to render template");
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}

fn color_name(value: &Value) -> &str {
    value.as_str().map(str::trim).unwrap_or_default()
}

fn palette(color: &str, light: bool) -> &'static str {
    match (color, light) {
        ("cyan", false) => "bg-cyan-400",
        ("pink", false) => "bg-pink-400",
        ("yellow", false) => "bg-yellow-300",
        ("purple", false) => "bg-purple-400",
        ("red", false) => "bg-red-400",
        ("lime", false) => "bg-lime-400",
        ("black", false) => "bg-black text-white",
        ("white", false) => "bg-white",
        ("cyan", true) => "bg-cyan-100",
        ("pink", true) => "bg-pink-100",
        ("yellow", true) => "bg-yellow-100",
        ("purple", true) => "bg-purple-100",
        ("red", true) => "bg-red-100",
        ("lime", true) => "bg-lime-100",
        ("black", true) => "bg-gray-800 text-white",
        ("white", true) => "bg-white",
        (_, false) => "bg-gray-300",
        (_, true) => "bg-gray-100",
    }
}

/// Tailwind background class for a named color.
pub fn color_class(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(palette(color_name(value), false).to_string()))
}

pub fn color_class_light(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    Ok(Value::String(palette(color_name(value), true).to_string()))
}

/// Year as text; 0 (unknown) renders as an empty string.
pub fn format_year(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let year = value.as_i64().unwrap_or_default();
    Ok(Value::String(if year == 0 {
        String::new()
    } else {
        year.to_string()
    }))
}

pub fn split(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("split filter requires a string"))?;
    let pat = args.get("pat").and_then(Value::as_str).unwrap_or(",");
    let parts = s
        .split(pat)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| Value::String(p.to_string()))
        .collect();
    Ok(Value::Array(parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn no_args() -> HashMap<String, Value> {
        HashMap::new()
    }

    #[test]
    fn templates_compile() {
        build().unwrap();
    }

    #[test]
    fn unknown_colors_fall_back_to_gray() {
        assert_eq!(color_class(&json!("cyan"), &no_args()).unwrap(), "bg-cyan-400");
        assert_eq!(color_class(&json!("chartreuse"), &no_args()).unwrap(), "bg-gray-300");
        assert_eq!(color_class_light(&json!(null), &no_args()).unwrap(), "bg-gray-100");
    }

    #[test]
    fn zero_year_is_blank() {
        assert_eq!(format_year(&json!(0), &no_args()).unwrap(), "");
        assert_eq!(format_year(&json!(2021), &no_args()).unwrap(), "2021");
    }

    #[test]
    fn split_trims_and_drops_empties() {
        let out = split(&json!("Rust, Go,, SQL "), &no_args()).unwrap();
        assert_eq!(out, json!(["Rust", "Go", "SQL"]));
    }

    #[test]
    fn renders_login_page_with_error() {
        let tera = build().unwrap();
        let mut ctx = Context::new();
        ctx.insert("error", "invalid email or password");
        ctx.insert("email", "a@b.co");
        let html = tera.render("login.html", &ctx).unwrap();
        assert!(html.contains("invalid email or password"));
        assert!(html.contains("a@b.co"));
    }

    #[test]
    fn admin_pages_take_their_own_title() {
        let tera = build().unwrap();
        let mut ctx = Context::new();
        ctx.insert("stats", &crate::models::portfolio::DashboardStats::default());
        ctx.insert("profile", &crate::models::profile::Profile::default());
        let html = tera.render("admin/dashboard.html", &ctx).unwrap();
        assert!(html.contains("<title>Admin · Dashboard</title>"));
    }
}
