use url::Url;

use crate::{Error, LinkRecord, StoryRecord, decode, encode};

pub const STORY_FRAGMENT_KEY: &str = "chortle";
pub const VIDEO_FRAGMENT_KEY: &str = "video";

/// What a shared link points at, as carried in its URL fragment.
///
/// - `#chortle=<token>`: a filled story
/// - `#video=<token>`: a recorded reading of a filled story
#[derive(Debug, Clone, PartialEq)]
pub enum ShareLink {
    Story(StoryRecord),
    Video(LinkRecord),
}

impl ShareLink {
    /// The story behind the link, whichever kind it is.
    pub fn story(&self) -> &StoryRecord {
        match self {
            Self::Story(record) => record,
            Self::Video(link) => &link.chortle,
        }
    }

    /// `key=token`, without the leading `#`.
    pub fn to_fragment(&self) -> Result<String, Error> {
        let (key, token) = match self {
            Self::Story(record) => (STORY_FRAGMENT_KEY, encode(record)?),
            Self::Video(link) => (VIDEO_FRAGMENT_KEY, encode(link)?),
        };
        Ok(format!("{key}={token}"))
    }

    /// Parse a fragment such as `#chortle=eyJ0...`. The leading `#` is
    /// optional and extra `&`-separated pairs are ignored; the first known
    /// key wins.
    pub fn parse_fragment(fragment: &str) -> Result<Self, Error> {
        let fragment = fragment.trim();
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);

        let mut first_unknown = None;
        for pair in fragment.split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            match key {
                STORY_FRAGMENT_KEY => {
                    return Ok(Self::Story(decode(&urlencoding::decode(raw)?)?));
                }
                VIDEO_FRAGMENT_KEY => {
                    return Ok(Self::Video(decode(&urlencoding::decode(raw)?)?));
                }
                other => {
                    first_unknown.get_or_insert_with(|| other.to_string());
                }
            }
        }

        Err(match first_unknown {
            Some(key) => Error::UnknownFragment(key),
            None => Error::MalformedFragment,
        })
    }

    /// `base` with its fragment replaced by this link's fragment.
    pub fn apply_to(&self, base: &Url) -> Result<Url, Error> {
        let mut url = base.clone();
        url.set_fragment(Some(&self.to_fragment()?));
        Ok(url)
    }

    pub fn from_url(url: &Url) -> Result<Self, Error> {
        let fragment = url.fragment().ok_or(Error::MalformedFragment)?;
        Self::parse_fragment(fragment)
    }
}
