//! Pure form validation for the authoring and auth payloads.
//!
//! Validators collect every violation instead of stopping at the first,
//! and the messages are a UI contract: the pages render them verbatim.

use devblog_api::types::{PostDraft, PublishRequest};
use url::Url;

pub const TITLE_MAX_LENGTH: usize = 200;
pub const CONTENT_MIN_LENGTH: usize = 50;
pub const EXCERPT_MAX_LENGTH: usize = 300;
pub const MAX_TAGS: usize = 5;
pub const PUBLISH_MESSAGE_MAX_LENGTH: usize = 500;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// A validation failure tied to one named input field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn field_error(field: &'static str, message: &'static str) -> FieldError {
    FieldError { field, message }
}

/// Validates a post draft, returning it unchanged when accepted.
///
/// Violations are reported for every failing field, in field order.
/// Lengths are counted in Unicode scalar values.
pub fn validate_post_draft(draft: PostDraft) -> Result<PostDraft, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title_len = draft.title.chars().count();
    if title_len == 0 {
        errors.push(field_error("title", "Title is required"));
    } else if title_len > TITLE_MAX_LENGTH {
        errors.push(field_error(
            "title",
            "Title must be less than 200 characters",
        ));
    }

    let content_len = draft.content.chars().count();
    if content_len == 0 {
        errors.push(field_error("content", "Content is required"));
    } else if content_len < CONTENT_MIN_LENGTH {
        errors.push(field_error(
            "content",
            "Content must be at least 50 characters",
        ));
    }

    if let Some(excerpt) = &draft.excerpt {
        if excerpt.chars().count() > EXCERPT_MAX_LENGTH {
            errors.push(field_error(
                "excerpt",
                "Excerpt must be less than 300 characters",
            ));
        }
    }

    // An empty string means "no cover image"; only non-empty values must
    // parse as an absolute URL.
    if let Some(cover) = &draft.cover_image {
        if !cover.is_empty() && Url::parse(cover).is_err() {
            errors.push(field_error("coverImage", "Must be a valid URL"));
        }
    }

    if draft.tags.len() > MAX_TAGS {
        errors.push(field_error("tags", "Maximum 5 tags allowed"));
    }

    if errors.is_empty() {
        Ok(draft)
    } else {
        Err(errors)
    }
}

/// Validates a publish request, returning it unchanged when accepted.
pub fn validate_publish_request(
    request: PublishRequest,
) -> Result<PublishRequest, Vec<FieldError>> {
    if let Some(message) = &request.message {
        if message.chars().count() > PUBLISH_MESSAGE_MAX_LENGTH {
            return Err(vec![field_error(
                "message",
                "Message must be less than 500 characters",
            )]);
        }
    }
    Ok(request)
}

/// Validates an email address, returning the trimmed value.
pub fn validate_email(input: &str) -> Result<String, Vec<FieldError>> {
    let trimmed = input.trim();
    if is_valid_email(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(vec![field_error(
            "email",
            "Please enter a valid email address",
        )])
    }
}

fn is_valid_email(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.split_once('.') {
        Some((host, rest)) => !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'),
        None => false,
    }
}

/// Validates a new password and its confirmation.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.push(field_error(
            "newPassword",
            "Password must be at least 8 characters",
        ));
    }
    if password != confirm {
        errors.push(field_error("confirmPassword", "Passwords don't match"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates login credentials (shape only; the backend checks them).
pub fn validate_login(email: &str, password: &str) -> Result<String, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut trimmed = String::new();
    match validate_email(email) {
        Ok(value) => trimmed = value,
        Err(mut e) => errors.append(&mut e),
    }
    if password.is_empty() {
        errors.push(field_error("password", "Password is required"));
    }
    if errors.is_empty() {
        Ok(trimmed)
    } else {
        Err(errors)
    }
}

/// Validates signup fields: display name, email, and password strength.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String), Vec<FieldError>> {
    let mut errors = Vec::new();
    let name = name.trim();
    if name.is_empty() {
        errors.push(field_error("name", "Name is required"));
    }
    let mut trimmed_email = String::new();
    match validate_email(email) {
        Ok(value) => trimmed_email = value,
        Err(mut e) => errors.append(&mut e),
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.push(field_error(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    if errors.is_empty() {
        Ok((name.to_string(), trimmed_email))
    } else {
        Err(errors)
    }
}
