//! WhatsApp and email hand-off links
//!
//! The page never sends anything itself. Every call to action is a link
//! that opens WhatsApp with a prefilled text or the visitor's mail client.

use url::Url;

use crate::config::BusinessConfig;
use crate::{CoreError, CoreResult};

const WHATSAPP_HOST: &str = "https://wa.me/";
const TEXT_PARAM: &str = "text";

/// Link builder resolved from the business configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandOff {
    whatsapp: Url,
    mailto: Url,
}

impl HandOff {
    pub fn new(config: &BusinessConfig) -> CoreResult<Self> {
        let digits = config.phone_digits();
        if digits.is_empty() {
            return Err(CoreError::Config(format!("phone {:?} has no digits", config.phone)));
        }
        let whatsapp = Url::parse(WHATSAPP_HOST)?.join(&digits)?;
        let mailto = Url::parse(&format!("mailto:{}", config.email))?;
        Ok(Self { whatsapp, mailto })
    }

    /// `https://wa.me/<digits>?text=<message>`
    pub fn whatsapp_link(&self, message: &str) -> String {
        let mut link = self.whatsapp.clone();
        link.query_pairs_mut().append_pair(TEXT_PARAM, message);
        link.into()
    }

    /// `mailto:<address>`
    pub fn mailto_link(&self) -> &str {
        self.mailto.as_str()
    }

    /// Recover the prefilled text from a WhatsApp link
    pub fn message_from_link(link: &str) -> CoreResult<Option<String>> {
        let url = Url::parse(link)?;
        Ok(url
            .query_pairs()
            .find(|(key, _)| key == TEXT_PARAM)
            .map(|(_, value)| value.into_owned()))
    }
}
