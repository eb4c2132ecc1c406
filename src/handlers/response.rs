use actix_web::HttpResponse;
use actix_web::http::header;
use serde::Serialize;

/// Uniform JSON envelope for every `/api/v1` response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data,
            errors: None,
        }
    }

    pub fn failure(message: impl Into<String>, errors: Option<serde_json::Value>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
            errors,
        }
    }
}

pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(message, Some(data)))
}

pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse::success(message, Some(data)))
}

pub fn ok_empty(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()>::success(message, None))
}

/// 303 redirect used after HTML form posts.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted() {
        let body = serde_json::to_value(ApiResponse::<()>::success("done", None)).unwrap();
        assert_eq!(body, serde_json::json!({ "status": true, "message": "done" }));
    }

    #[test]
    fn failure_carries_errors() {
        let body = serde_json::to_value(ApiResponse::<()>::failure(
            "Invalid request body",
            Some(serde_json::json!("expected value")),
        ))
        .unwrap();
        assert_eq!(body["status"], false);
        assert_eq!(body["errors"], "expected value");
    }
}
