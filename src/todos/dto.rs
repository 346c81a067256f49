use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::error::ApiError;
use crate::todos::repo_types::TodoPatch;
use crate::validation::check_length;

const TITLE_MIN: usize = 1;
const TITLE_MAX: usize = 200;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

impl CreateTodoRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_length("title", &self.title, TITLE_MIN, TITLE_MAX)
    }
}

/// PATCH body. Outer `None`: field absent. `Some(None)`: field sent as `null`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub completed: Option<Option<bool>>,
}

impl UpdateTodoRequest {
    /// Validates the provided values and drops absent and null fields alike.
    pub fn into_patch(self) -> Result<TodoPatch, ApiError> {
        if let Some(Some(title)) = &self.title {
            check_length("title", title, TITLE_MIN, TITLE_MAX)?;
        }
        if matches!(self.title, Some(None)) || matches!(self.completed, Some(None)) {
            debug!("null fields in todo patch ignored");
        }
        Ok(TodoPatch {
            title: self.title.flatten(),
            completed: self.completed.flatten(),
        })
    }
}

fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> UpdateTodoRequest {
        serde_json::from_str(raw).expect("valid patch body")
    }

    #[test]
    fn absent_null_and_present_are_distinct() {
        let absent = parse(r#"{}"#);
        assert_eq!(absent.title, None);

        let null = parse(r#"{"title": null}"#);
        assert_eq!(null.title, Some(None));

        let present = parse(r#"{"title": "x", "completed": true}"#);
        assert_eq!(present.title, Some(Some("x".to_string())));
        assert_eq!(present.completed, Some(Some(true)));
    }

    #[test]
    fn only_provided_values_reach_the_patch() {
        let patch = parse(r#"{"title": null, "completed": true}"#)
            .into_patch()
            .unwrap();
        assert_eq!(
            patch,
            TodoPatch {
                title: None,
                completed: Some(true)
            }
        );
    }

    #[test]
    fn provided_title_is_validated() {
        let err = parse(r#"{"title": ""}"#).into_patch().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));

        let long = format!(r#"{{"title": "{}"}}"#, "a".repeat(201));
        assert!(parse(&long).into_patch().is_err());
    }

    #[test]
    fn wrong_type_fails_to_parse() {
        assert!(serde_json::from_str::<UpdateTodoRequest>(r#"{"completed": "yes"}"#).is_err());
    }

    #[test]
    fn create_title_bounds() {
        assert!(CreateTodoRequest { title: "Buy milk".into() }.validate().is_ok());
        assert!(CreateTodoRequest { title: String::new() }.validate().is_err());
        assert!(CreateTodoRequest { title: "a".repeat(200) }.validate().is_ok());
        assert!(CreateTodoRequest { title: "a".repeat(201) }.validate().is_err());
    }
}
