use anyhow::Context;
use chortle_codec::{LinkRecord, STORY_FRAGMENT_KEY, ShareLink, StoryRecord, VIDEO_FRAGMENT_KEY, decode};
use url::Url;

/// Accepts a full URL, a `#key=token` fragment (hash optional) or a bare
/// token. A bare token is tried as a story first, then as a video link.
pub fn parse_link(input: &str) -> anyhow::Result<ShareLink> {
    let input = input.trim();

    let link = if input.contains("://") {
        let url = Url::parse(input).context("invalid link")?;
        ShareLink::from_url(&url)
    } else if is_fragment(input) {
        ShareLink::parse_fragment(input)
    } else {
        decode::<StoryRecord>(input)
            .map(ShareLink::Story)
            .or_else(|_| decode::<LinkRecord>(input).map(ShareLink::Video))
    };

    let link = link.context("invalid link")?;
    tracing::debug!(template = link.story().template(), "link_parsed");
    Ok(link)
}

fn is_fragment(input: &str) -> bool {
    input.starts_with('#')
        || [STORY_FRAGMENT_KEY, VIDEO_FRAGMENT_KEY]
            .iter()
            .any(|key| input.strip_prefix(key).is_some_and(|rest| rest.starts_with('=')))
}
