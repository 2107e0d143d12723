use promptdeck_core::domain::prompt::entities::prompt::{is_known_category, is_known_prompt_type};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePromptValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[validate(length(min = 1, message = "prompt is required"))]
    pub prompt: String,

    #[validate(custom(function = validate_category))]
    pub category: String,

    #[serde(default, rename = "type")]
    #[validate(custom(function = validate_prompt_type))]
    pub kind: Option<String>,

    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdatePromptValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "title cannot be emptied"))]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "prompt cannot be emptied"))]
    pub prompt: Option<String>,

    #[serde(default)]
    #[validate(custom(function = validate_category))]
    pub category: Option<String>,

    #[serde(default, rename = "type")]
    #[validate(custom(function = validate_prompt_type))]
    pub kind: Option<String>,

    #[serde(default)]
    pub author: Option<String>,
}

fn validate_category(value: &str) -> Result<(), ValidationError> {
    if is_known_category(value) {
        return Ok(());
    }

    Err(ValidationError::new("unknown_category")
        .with_message("category must be one of the catalog values".into()))
}

fn validate_prompt_type(value: &str) -> Result<(), ValidationError> {
    if is_known_prompt_type(value) {
        return Ok(());
    }

    Err(ValidationError::new("unknown_type")
        .with_message("type must be one of the catalog values".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_fails_creation() {
        let payload: CreatePromptValidator = serde_json::from_str(
            r#"{ "title": "", "prompt": "Say hi", "category": "Writing" }"#,
        )
        .unwrap();

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_unknown_category_fails_creation() {
        let payload: CreatePromptValidator = serde_json::from_str(
            r#"{ "title": "Greeting", "prompt": "Say hi", "category": "Gardening" }"#,
        )
        .unwrap();

        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let payload: UpdatePromptValidator = serde_json::from_str(r#"{}"#).unwrap();

        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_provided_type_checked_against_catalog() {
        let payload: UpdatePromptValidator =
            serde_json::from_str(r#"{ "type": "Daydream" }"#).unwrap();

        assert!(payload.validate().is_err());
    }
}
