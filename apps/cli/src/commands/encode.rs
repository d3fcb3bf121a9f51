use std::io::Read;

use anyhow::Context;
use chortle_codec::{LinkRecord, STORY_FRAGMENT_KEY, StoryRecord, VIDEO_FRAGMENT_KEY, encode};
use serde_json::Value;

#[derive(clap::Args)]
pub struct Args {
    /// JSON object to encode. Read from stdin when omitted.
    pub json: Option<String>,

    /// Print `key=token` instead of the bare token
    #[arg(long)]
    pub fragment: bool,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let json = match args.json {
        Some(json) => json,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let (key, token) = encode_json(&json)?;
    if args.fragment {
        println!("{key}={token}");
    } else {
        println!("{token}");
    }
    Ok(())
}

/// Objects with a `videoId` encode as video links, everything else as a
/// story.
fn encode_json(json: &str) -> anyhow::Result<(&'static str, String)> {
    let value: Value = serde_json::from_str(json).context("input is not JSON")?;
    let Value::Object(map) = value else {
        anyhow::bail!("expected a JSON object");
    };

    if map.contains_key("videoId") {
        let link: LinkRecord = serde_json::from_value(Value::Object(map))?;
        return Ok((VIDEO_FRAGMENT_KEY, encode(&link)?));
    }

    let record = StoryRecord::from_json_map(map)?;
    Ok((STORY_FRAGMENT_KEY, encode(&record)?))
}
