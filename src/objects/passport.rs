//! Telegram Passport.

use bon::Builder;
use serde_with::skip_serializing_none;

use crate::prelude::*;

/// Telegram Passport data shared with the bot by the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,

    /// Encrypted credentials required to decrypt the data.
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport, in JPEG format when decrypted and no larger than 10MB.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    pub file_date: i64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[must_use]
pub enum EncryptedPassportElementType {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

/// Documents or other Telegram Passport elements shared with the bot by the user.
///
/// See also: <https://core.telegram.org/bots/api#encryptedpassportelement>.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,

    /// Base64-encoded encrypted element data.
    pub data: Option<String>,

    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub files: Option<Vec<PassportFile>>,
    pub front_side: Option<PassportFile>,
    pub reverse_side: Option<PassportFile>,
    pub selfie: Option<PassportFile>,
    pub translation: Option<Vec<PassportFile>>,

    /// Base64-encoded element hash for using in [`PassportElementError::Unspecified`].
    pub hash: String,
}

/// Data required for decrypting and authenticating [`EncryptedPassportElement`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,

    /// Base64-encoded secret, encrypted with the bot's public RSA key.
    pub secret: String,
}

/// An error in the Telegram Passport element which was submitted that should be resolved by
/// the user, dispatched on `source`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
#[must_use]
pub enum PassportElementError {
    #[serde(rename = "data")]
    DataField(PassportElementErrorDataField),

    FrontSide(PassportElementErrorFile),
    ReverseSide(PassportElementErrorFile),
    Selfie(PassportElementErrorFile),
    File(PassportElementErrorFile),
    Files(PassportElementErrorFiles),
    TranslationFile(PassportElementErrorFile),
    TranslationFiles(PassportElementErrorFiles),
    Unspecified(PassportElementErrorUnspecified),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct PassportElementErrorDataField {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,

    pub field_name: String,

    /// Base64-encoded data hash.
    pub data_hash: String,

    pub message: String,
}

/// An issue with a single file: the front side, reverse side, selfie, or a file or translation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct PassportElementErrorFile {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,

    pub file_hash: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct PassportElementErrorFiles {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,

    pub file_hashes: Vec<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(on(String, into))]
#[must_use]
pub struct PassportElementErrorUnspecified {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementType,

    pub element_hash: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_error_carries_both_discriminants_ok() -> Result {
        let error = PassportElementError::Selfie(
            PassportElementErrorFile::builder()
                .kind(EncryptedPassportElementType::Passport)
                .file_hash("aGFzaA==")
                .message("Blurry")
                .build(),
        );
        assert_eq!(
            encode(&error)?,
            // language=json
            serde_json::json!({
                "source": "selfie",
                "type": "passport",
                "file_hash": "aGFzaA==",
                "message": "Blurry",
            }),
        );
        Ok(())
    }

    #[test]
    fn test_same_shape_different_source_ok() -> Result {
        // language=json
        let error: PassportElementError = decode_str(
            r#"{
                "source": "translation_file",
                "type": "utility_bill",
                "file_hash": "h",
                "message": "m"
            }"#,
        )?;
        assert!(matches!(error, PassportElementError::TranslationFile(_)));
        Ok(())
    }

    #[test]
    fn test_data_field_ok() -> Result {
        // language=json
        let error: PassportElementError = decode_str(
            r#"{
                "source": "data",
                "type": "personal_details",
                "field_name": "first_name",
                "data_hash": "h",
                "message": "m"
            }"#,
        )?;
        let PassportElementError::DataField(field) = error else {
            panic!("expected a data field error, got {error:?}");
        };
        assert_eq!(field.field_name, "first_name");
        Ok(())
    }
}
