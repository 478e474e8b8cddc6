use serde::Deserialize;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::AppError;

/// Raw form bindings plus their `validate()` normalization into typed
/// records. Services only ever see the validated record types.

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegisterData {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl RegisterForm {
    pub fn validate(self) -> Result<RegisterData, AppError> {
        let email = required("email", &self.email)?;
        if !email.validate_email() {
            return Err(AppError::ValidationFailed(
                "email is not a valid address".to_string(),
            ));
        }
        let name = required("name", &self.name)?;
        let password = required("password", &self.password)?;
        Ok(RegisterData {
            email,
            name,
            password,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(self) -> Result<LoginData, AppError> {
        let email = required("email", &self.email)?;
        let password = required("password", &self.password)?;
        Ok(LoginData { email, password })
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct CommentData {
    pub text: String,
}

impl CommentForm {
    pub fn validate(self) -> Result<CommentData, AppError> {
        let text = required("comment", &self.comment)?;
        Ok(CommentData { text })
    }
}

#[derive(Debug, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct PostData {
    pub title: String,
    pub subtitle: String,
    pub img_url: String,
    pub body: String,
}

impl PostForm {
    pub fn validate(self) -> Result<PostData, AppError> {
        let title = required("title", &self.title)?;
        let subtitle = required("subtitle", &self.subtitle)?;
        let img_url = required("img_url", &self.img_url)?;
        if !img_url.validate_url() {
            return Err(AppError::ValidationFailed(
                "img_url is not a valid URL".to_string(),
            ));
        }
        let body = required("body", &self.body)?;
        Ok(PostData {
            title,
            subtitle,
            img_url,
            body,
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationFailed(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_requires_every_field() {
        let form = RegisterForm {
            email: "a@x.com".to_string(),
            name: String::new(),
            password: "secret1".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::ValidationFailed(_))
        ));
    }

    #[test]
    fn registration_rejects_malformed_email() {
        let form = RegisterForm {
            email: "not-an-email".to_string(),
            name: "A".to_string(),
            password: "secret1".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::ValidationFailed(_))
        ));
    }

    #[test]
    fn registration_accepts_valid_input() {
        let form = RegisterForm {
            email: " a@x.com ".to_string(),
            name: "A".to_string(),
            password: "secret1".to_string(),
        };
        let data = form.validate().unwrap();
        assert_eq!(data.email, "a@x.com");
    }

    #[test]
    fn post_form_rejects_bad_image_url() {
        let form = PostForm {
            title: "Hello".to_string(),
            subtitle: "World".to_string(),
            img_url: "not a url".to_string(),
            body: "<p>hi</p>".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::ValidationFailed(_))
        ));
    }

    #[test]
    fn whitespace_only_comment_is_rejected() {
        let form = CommentForm {
            comment: "   ".to_string(),
        };
        assert!(matches!(
            form.validate(),
            Err(AppError::ValidationFailed(_))
        ));
    }
}
