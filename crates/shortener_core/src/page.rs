use std::fmt;

use url::Url;

/// Address of the page hosting the shortener, used as prefix for results.
///
/// The fragment is discarded on construction, so `https://site.example/#app`
/// and `https://site.example/` compose identical result URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAddress {
    base: Url,
}

impl PageAddress {
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        let mut base = Url::parse(href.trim())?;
        base.set_fragment(None);
        Ok(Self { base })
    }

    /// Page address without fragment: scheme, host, path and query.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    /// Concatenates the base address and a service identifier.
    pub fn compose(&self, id: &str) -> String {
        format!("{}{}", self.base.as_str(), id)
    }
}

impl fmt::Display for PageAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base())
    }
}
