use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::{AppError, FieldErrors};

fn collect_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut fields = FieldErrors::new();
    for (field, errors) in errors.field_errors().iter() {
        let messages = errors
            .iter()
            .map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }
    fields
}

/// JSON body extractor that runs `validator` rules on the deserialized value.
///
/// Both serde rejections (missing field, wrong type) and validation rule
/// failures come back as 400 with a per-field message map.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::field(field, &format!("{} is required", field));
                }

                if error_msg.contains("invalid type") {
                    if let Some(field) = error_msg
                        .split(": invalid type")
                        .next()
                        .and_then(|s| s.rsplit(' ').next())
                        .filter(|s| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'))
                    {
                        return AppError::field(field, &format!("{} has an invalid type", field));
                    }
                    return AppError::bad_request(anyhow::anyhow!(
                        "Invalid field type in request"
                    ));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow::anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(collect_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Dto {
        #[validate(length(max = 10, message = "name is too long"))]
        name: Option<String>,
        #[validate(email(message = "email is not valid"))]
        email: String,
    }

    #[test]
    fn collects_messages_per_field() {
        let dto = Dto {
            name: Some("a".repeat(20)),
            email: "not-an-email".to_string(),
        };
        let errors = dto.validate().unwrap_err();
        let fields = collect_errors(&errors);

        assert_eq!(fields["name"], vec!["name is too long".to_string()]);
        assert_eq!(fields["email"], vec!["email is not valid".to_string()]);
    }
}
