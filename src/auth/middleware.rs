use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, dev::Payload, web};
use std::future::{Ready, ready};

use crate::auth::session::{SESSION_COOKIE, SessionKeys};
use crate::errors::AppError;

/// Resolve the user id carried by the request's session cookie.
pub fn session_user(req: &HttpRequest) -> Option<i32> {
    let keys = req.app_data::<web::Data<SessionKeys>>()?;
    let cookie = req.cookie(SESSION_COOKIE)?;
    if cookie.value().is_empty() {
        return None;
    }
    keys.verify(cookie.value()).ok()
}

/// Session guard for the HTML admin panel. Unauthenticated requests are
/// redirected to `/page401`.
pub struct AdminSession {
    pub user_id: i32,
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(match session_user(req) {
            Some(user_id) => Ok(AdminSession { user_id }),
            None => {
                tracing::debug!(path = %req.path(), "admin page without session");
                let redirect = HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, "/page401"))
                    .finish();
                Err(actix_web::error::InternalError::from_response("unauthorized", redirect).into())
            }
        })
    }
}

/// Session guard for JSON write routes. Unauthenticated requests get a 401
/// envelope.
pub struct ApiSession {
    pub user_id: i32,
}

impl FromRequest for ApiSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            session_user(req)
                .map(|user_id| ApiSession { user_id })
                .ok_or_else(|| AppError::Auth("unauthorized".to_string())),
        )
    }
}
