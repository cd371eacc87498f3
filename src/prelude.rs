pub use serde::{Deserialize, Serialize};
pub use serde_json::Value;
pub use tracing::{debug, instrument, trace};

pub use crate::error::Error;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
