//! Bot API connection settings.

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::{
    methods::{Method, Request},
    prelude::*,
};

pub const DEFAULT_ROOT_URL: &str = "https://api.telegram.org";

/// Where and as whom to call the Bot API.
///
/// This only assembles URLs: sending the request is up to the caller.
#[must_use]
#[derive(Clone, Debug)]
pub struct Bot {
    token: SecretString,
    root_url: Url,
    test_environment: bool,
}

impl Bot {
    /// Validate the token and point at the public Bot API server.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if !is_well_formed(&token) {
            return Err(Error::MalformedToken);
        }
        Ok(Self {
            token: SecretString::from(token),
            root_url: Url::parse(DEFAULT_ROOT_URL)?,
            test_environment: false,
        })
    }

    /// Use a [local Bot API server][1] instead of the public one.
    ///
    /// [1]: https://core.telegram.org/bots/api#using-a-local-bot-api-server
    pub fn with_root_url(self, root_url: &str) -> Result<Self> {
        let root_url = Url::parse(root_url)?;
        if root_url.cannot_be_a_base() {
            return Err(Error::CannotBeABase(root_url));
        }
        Ok(Self { root_url, ..self })
    }

    /// Route requests to the [test environment][1].
    ///
    /// [1]: https://core.telegram.org/bots/webapps#using-bots-in-the-test-environment
    pub fn with_test_environment(self, test_environment: bool) -> Self {
        Self { test_environment, ..self }
    }

    /// Build the `bot<token>/<method>` URL.
    #[instrument(skip_all, fields(method = method))]
    pub fn method_url(&self, method: &str) -> Result<Url> {
        if method.is_empty() || !method.bytes().all(|byte| byte.is_ascii_alphanumeric()) {
            return Err(Error::InvalidMethodName(method.to_owned()));
        }
        let mut url = self.root_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::CannotBeABase(self.root_url.clone()))?
            .pop_if_empty()
            .push(&format!("bot{}", self.token.expose_secret()))
            .extend(self.test_environment.then_some("test"))
            .push(method);
        trace!(test_environment = self.test_environment, "Built the method URL");
        Ok(url)
    }

    /// Assemble the request together with its target URL.
    pub fn prepare<M: Method + ?Sized>(&self, method: &M) -> Result<(Url, Request)> {
        Ok((self.method_url(M::NAME)?, method.to_request()?))
    }
}

/// `<bot ID>:<secret>`, as issued by [@BotFather](https://t.me/botfather).
fn is_well_formed(token: &str) -> bool {
    token.split_once(':').is_some_and(|(bot_id, secret)| {
        !bot_id.is_empty()
            && bot_id.bytes().all(|byte| byte.is_ascii_digit())
            && !secret.is_empty()
            && secret
                .bytes()
                .all(|byte| byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::GetMe;

    const TOKEN: &str = "123456:ABC-DEF_ghi";

    #[test]
    fn test_method_url_ok() -> Result {
        let url = Bot::new(TOKEN)?.method_url("getMe")?;
        assert_eq!(url.as_str(), "https://api.telegram.org/bot123456:ABC-DEF_ghi/getMe");
        Ok(())
    }

    #[test]
    fn test_environment_url_ok() -> Result {
        let url = Bot::new(TOKEN)?.with_test_environment(true).method_url("sendMessage")?;
        assert_eq!(url.as_str(), "https://api.telegram.org/bot123456:ABC-DEF_ghi/test/sendMessage");
        Ok(())
    }

    #[test]
    fn test_local_server_url_ok() -> Result {
        let url = Bot::new(TOKEN)?.with_root_url("http://localhost:8081/")?.method_url("getMe")?;
        assert_eq!(url.as_str(), "http://localhost:8081/bot123456:ABC-DEF_ghi/getMe");
        Ok(())
    }

    #[test]
    fn test_prepare_ok() -> Result {
        let (url, request) = Bot::new(TOKEN)?.prepare(&GetMe::default())?;
        assert!(url.as_str().ends_with("/getMe"));
        assert_eq!(request.method, "getMe");
        assert!(request.parameters.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_token_fails() {
        for token in ["", "123456", "abc:def", "123456:", "123456:abc/def", "123456:abc def"] {
            assert!(matches!(Bot::new(token), Err(Error::MalformedToken)), "{token}");
        }
    }

    #[test]
    fn test_invalid_root_url_fails() -> Result {
        let bot = Bot::new(TOKEN)?;
        assert!(matches!(bot.clone().with_root_url("not a url"), Err(Error::Url(_))));
        assert!(matches!(
            bot.with_root_url("mailto:bot@example.org"),
            Err(Error::CannotBeABase(_)),
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_method_name_fails() -> Result {
        assert!(matches!(Bot::new(TOKEN)?.method_url("get/Me"), Err(Error::InvalidMethodName(_))));
        Ok(())
    }

    #[test]
    fn test_token_is_redacted_ok() -> Result {
        assert!(!format!("{:?}", Bot::new(TOKEN)?).contains("ABC-DEF"));
        Ok(())
    }
}
