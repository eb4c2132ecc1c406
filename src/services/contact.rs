use crate::errors::AppResult;
use crate::models::contact::ContactRequest;
use crate::services::validation;

/// Accept a contact form submission. Submissions are logged, not stored.
pub fn submit(req: &ContactRequest) -> AppResult<()> {
    validation::validate_contact(req)?;
    tracing::info!(
        name = %req.name.trim(),
        email = %req.email.trim(),
        subject = %req.subject.trim(),
        "contact message received"
    );
    Ok(())
}
