//! Bot API [available types][1].
//!
//! Records map one-to-one onto the snake_case wire objects. Unset optional fields are omitted
//! when encoding, and unknown keys are ignored when decoding.
//!
//! [1]: https://core.telegram.org/bots/api#available-types

pub mod background;
pub mod boost;
pub mod business;
pub mod chat;
pub mod commands;
pub mod forum;
pub mod games;
pub mod inline;
pub mod input;
pub mod markup;
pub mod media;
pub mod message;
pub mod passport;
pub mod payments;
pub mod poll;
pub mod reaction;
pub mod service;
pub mod stickers;
pub mod update;
pub mod user;

pub use self::{
    background::*,
    boost::*,
    business::*,
    chat::*,
    commands::*,
    forum::*,
    games::*,
    inline::*,
    input::*,
    markup::*,
    media::*,
    message::*,
    passport::*,
    payments::*,
    poll::*,
    reaction::*,
    service::*,
    stickers::*,
    update::*,
    user::*,
};

/// Field that is always `true` on the wire.
pub type True = monostate::MustBeBool<true>;
