use chortle_codec::ShareLink;

use crate::link::parse_link;

#[derive(clap::Args)]
pub struct Args {
    /// Bare token, `#chortle=...`/`#video=...` fragment, or full URL
    pub link: String,
}

pub fn run(args: Args) -> anyhow::Result<()> {
    let json = match parse_link(&args.link)? {
        ShareLink::Story(record) => serde_json::to_string_pretty(&record)?,
        ShareLink::Video(link) => serde_json::to_string_pretty(&link)?,
    };
    println!("{json}");
    Ok(())
}
