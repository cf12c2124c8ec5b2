//! Telegram Passport objects and the `PassportElementError` one-of family,
//! discriminated by the `source` field.

use serde::{Deserialize, Serialize};

/// Telegram Passport data shared with the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    pub file_date: i64,
}

/// Documents or other Telegram Passport elements shared with the bot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PassportFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<PassportFile>>,
    pub hash: String,
}

/// Data required for decrypting and authenticating passport elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    pub secret: String,
}

/// An error in a Telegram Passport element to be reported to the user,
/// discriminated by the `source` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum PassportElementError {
    #[serde(rename = "data")]
    DataField(PassportElementErrorDataField),
    #[serde(rename = "front_side")]
    FrontSide(PassportElementErrorFrontSide),
    #[serde(rename = "reverse_side")]
    ReverseSide(PassportElementErrorReverseSide),
    #[serde(rename = "selfie")]
    Selfie(PassportElementErrorSelfie),
    #[serde(rename = "file")]
    File(PassportElementErrorFile),
    #[serde(rename = "files")]
    Files(PassportElementErrorFiles),
    #[serde(rename = "translation_file")]
    TranslationFile(PassportElementErrorTranslationFile),
    #[serde(rename = "translation_files")]
    TranslationFiles(PassportElementErrorTranslationFiles),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorDataField {
    #[serde(rename = "type")]
    pub kind: String,
    pub field_name: String,
    pub data_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorFrontSide {
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorReverseSide {
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorSelfie {
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorFile {
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorFiles {
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hashes: Vec<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFile {
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hash: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportElementErrorTranslationFiles {
    #[serde(rename = "type")]
    pub kind: String,
    pub file_hashes: Vec<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn element_error_is_tagged_by_source() {
        let error = PassportElementError::Selfie(PassportElementErrorSelfie {
            kind: "passport".to_string(),
            file_hash: "h".to_string(),
            message: "blurry".to_string(),
        });
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value, json!({
            "source": "selfie", "type": "passport", "file_hash": "h", "message": "blurry"
        }));
        let back: PassportElementError = serde_json::from_value(value).unwrap();
        assert_eq!(back, error);
    }

    #[test]
    fn unknown_source_is_rejected() {
        let err = serde_json::from_value::<PassportElementError>(json!({
            "source": "hologram", "type": "passport", "message": "?"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("hologram"), "{err}");
    }
}
