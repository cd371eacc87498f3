use bon::Builder;

use crate::{methods::Method, objects::PassportElementError, prelude::*};

/// Inform a user that some of the Telegram Passport elements they provided contain errors.
///
/// The user will not be able to re-submit their Passport to you until the errors are fixed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[must_use]
pub struct SetPassportDataErrors {
    pub user_id: i64,
    pub errors: Vec<PassportElementError>,
}

impl Method for SetPassportDataErrors {
    const NAME: &'static str = "setPassportDataErrors";

    type Response = bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{EncryptedPassportElementType, PassportElementErrorUnspecified};

    #[test]
    fn test_set_passport_data_errors_ok() -> Result {
        let error = PassportElementErrorUnspecified::builder()
            .kind(EncryptedPassportElementType::Address)
            .element_hash("aGFzaA==")
            .message("Please resubmit")
            .build();
        let request = SetPassportDataErrors::builder()
            .user_id(42)
            .errors(vec![PassportElementError::Unspecified(error)])
            .build()
            .to_request()?;
        assert_eq!(
            request.parameters["errors"],
            // language=json
            serde_json::json!([
                {
                    "source": "unspecified",
                    "type": "address",
                    "element_hash": "aGFzaA==",
                    "message": "Please resubmit",
                },
            ]),
        );
        Ok(())
    }
}
