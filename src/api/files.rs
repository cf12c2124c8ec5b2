//! File metadata and profile photos.

use serde::Serialize;

use super::Method;
use crate::types::{File, UserProfilePhotos};

/// `getFile`: basic information about a file, including the `file_path`
/// needed to build a download URL with
/// [`BotClient::file_url`](crate::client::BotClient::file_url).
#[derive(Debug, Clone, Serialize)]
pub struct GetFileRequest {
    pub file_id: String,
}

impl GetFileRequest {
    pub fn new(file_id: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
        }
    }
}

impl Method for GetFileRequest {
    const NAME: &'static str = "getFile";
    type Response = File;
}

/// `getUserProfilePhotos`: a page of a user's profile pictures.
#[derive(Debug, Clone, Serialize)]
pub struct GetUserProfilePhotosRequest {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl Method for GetUserProfilePhotosRequest {
    const NAME: &'static str = "getUserProfilePhotos";
    type Response = UserProfilePhotos;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;

    #[test]
    fn get_file_serializes_file_id() {
        let value = serde_json::to_value(GetFileRequest::new("abc")).unwrap();
        assert_eq!(value, serde_json::json!({"file_id": "abc"}));
        assert_eq!(GetFileRequest::NAME, "getFile");
    }
}
