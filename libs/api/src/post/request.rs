use serde::Deserialize;

use crate::response::ApiError;

#[derive(Debug, Deserialize)]
pub struct NewPostForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewPostForm {
    /// Presence check only: both fields must be sent and non-empty.
    pub fn validated(&self) -> Result<(&str, &str), ApiError> {
        let title = self.title.as_deref().filter(|t| !t.is_empty());
        let content = self.content.as_deref().filter(|c| !c.is_empty());

        match (title, content) {
            (Some(title), Some(content)) => Ok((title, content)),
            _ => Err(ApiError::ValidationError(
                "title and content are required".to_string(),
            )),
        }
    }
}
