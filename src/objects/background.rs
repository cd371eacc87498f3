//! Chat backgrounds.

use serde_with::skip_serializing_none;

use crate::{objects::Document, prelude::*};

/// The way a background is filled, dispatched on `type`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum BackgroundFill {
    /// Filled using the selected color, in RGB24 format.
    Solid { color: i32 },

    Gradient {
        top_color: i32,
        bottom_color: i32,

        /// Clockwise rotation angle of the background fill in degrees; 0-359.
        rotation_angle: i32,
    },

    /// A list of the 3 or 4 base colors that are used to generate the freeform gradient.
    FreeformGradient { colors: Vec<i32> },
}

/// Type of a background, dispatched on `type`.
///
/// See also: <https://core.telegram.org/bots/api#backgroundtype>.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[must_use]
pub enum BackgroundType {
    /// Automatically filled based on the selected colors.
    Fill(BackgroundTypeFill),

    /// A wallpaper in the JPEG format.
    Wallpaper(BackgroundTypeWallpaper),

    /// A PNG or TGV pattern to be combined with the background fill chosen by the user.
    Pattern(BackgroundTypePattern),

    /// Taken directly from a built-in chat theme.
    ChatTheme(BackgroundTypeChatTheme),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BackgroundTypeFill {
    pub fill: BackgroundFill,

    /// Dimming of the background in dark themes, as a percentage; 0-100.
    pub dark_theme_dimming: i32,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BackgroundTypeWallpaper {
    pub document: Document,
    pub dark_theme_dimming: i32,
    pub is_blurred: Option<bool>,
    pub is_moving: Option<bool>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BackgroundTypePattern {
    pub document: Document,
    pub fill: BackgroundFill,

    /// Intensity of the pattern when it is shown above the filled background; 0-100.
    pub intensity: i32,

    pub is_inverted: Option<bool>,
    pub is_moving: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct BackgroundTypeChatTheme {
    pub theme_name: String,
}

/// A chat background.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct ChatBackground {
    #[serde(rename = "type")]
    pub kind: BackgroundType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_str, encode};

    #[test]
    fn test_nested_discriminants_ok() -> Result {
        // language=json
        let background: ChatBackground = decode_str(
            r#"{
                "type": {
                    "type": "fill",
                    "fill": {
                        "type": "gradient",
                        "top_color": 1,
                        "bottom_color": 2,
                        "rotation_angle": 45
                    },
                    "dark_theme_dimming": 50
                }
            }"#,
        )?;
        let BackgroundType::Fill(fill) = &background.kind else {
            panic!("expected a fill, got {:?}", background.kind);
        };
        assert_eq!(
            fill.fill,
            BackgroundFill::Gradient { top_color: 1, bottom_color: 2, rotation_angle: 45 },
        );
        Ok(())
    }

    #[test]
    fn test_encode_writes_discriminant_ok() -> Result {
        let fill = BackgroundFill::FreeformGradient { colors: vec![1, 2, 3] };
        assert_eq!(
            encode(&fill)?,
            serde_json::json!({"type": "freeform_gradient", "colors": [1, 2, 3]}),
        );
        Ok(())
    }
}
