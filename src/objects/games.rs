//! Games.

use serde_with::skip_serializing_none;

use crate::{
    objects::{Animation, MessageEntity, PhotoSize, User},
    prelude::*,
};

/// A game. Use [BotFather][1] to create and edit games, their short names will act as unique identifiers.
///
/// [1]: https://t.me/botfather
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct Game {
    pub title: String,
    pub description: String,
    pub photo: Vec<PhotoSize>,

    /// Brief description of the game or high scores included in the game message.
    pub text: Option<String>,

    pub text_entities: Option<Vec<MessageEntity>>,
    pub animation: Option<Animation>,
}

/// One row of the high scores table for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct GameHighScore {
    pub position: i32,
    pub user: User,
    pub score: i32,
}
