//! Navigation request parsing.
//!
//! Splits a requested location into path, query and fragment, normalizing
//! dot segments and percent-encoding the way a browser address bar does.

use url::Url;

use crate::routing::page::Params;

const ORIGIN: &str = "http://app.localhost/";

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Absolute, normalized path (always starts with `/`).
    pub path: String,
    /// Decoded query parameters. Repeated keys keep the last value.
    pub query: Params,
    /// Decoded fragment without the leading `#`.
    pub fragment: Option<String>,
}

impl NavigationRequest {
    /// Parse a location such as `/project/4?tab=notes#top`.
    ///
    /// Relative input is taken relative to `/`. Anything that would name
    /// another origin (`//host/x`, `http://host/x`) is treated as a path on
    /// this origin.
    pub fn parse(location: &str) -> Result<Self, url::ParseError> {
        let origin = Url::parse(ORIGIN)?;
        let rooted = format!("/{}", location.trim_start_matches('/'));
        let url = origin.join(&rooted)?;

        let query = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let fragment = url.fragment().map(|f| {
            percent_encoding::percent_decode_str(f)
                .decode_utf8_lossy()
                .into_owned()
        });

        Ok(Self {
            path: url.path().to_string(),
            query,
            fragment,
        })
    }

    /// Whether the location carried neither query nor fragment.
    pub fn is_bare(&self) -> bool {
        self.query.is_empty() && self.fragment.is_none()
    }
}
