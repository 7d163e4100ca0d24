use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Message shared by create and update when a required field is absent
pub const REQUIRED_FIELDS_MESSAGE: &str = "Title and image URL are required";

/// Validated mutable fields of a project.
///
/// Only presence is checked: `title` and `image_url` must be non-empty, the
/// optional fields collapse to `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub roblox_link: String,
}

impl ProjectDraft {
    #[track_caller]
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        image_url: Option<String>,
        roblox_link: Option<String>,
    ) -> CoreErrorResult<Self> {
        let title = title.filter(|t| !t.is_empty());
        let image_url = image_url.filter(|u| !u.is_empty());

        let (title, image_url) = match (title, image_url) {
            (Some(title), Some(image_url)) => (title, image_url),
            (title, _) => {
                let field = if title.is_none() { "title" } else { "imageUrl" };
                return Err(CoreError::Validation {
                    message: REQUIRED_FIELDS_MESSAGE.to_string(),
                    field: Some(field.to_string()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        };

        Ok(Self {
            title,
            description: description.unwrap_or_default(),
            image_url,
            roblox_link: roblox_link.unwrap_or_default(),
        })
    }
}
