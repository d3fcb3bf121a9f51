use chortle_caption::{CaptionChunk, Chunker};
use chortle_teleprompter::{Segment, highlighted_line};
use chortle_template::{TemplateCatalog, render_story};
use crossterm::style::Stylize;

use crate::env::Env;
use crate::link::parse_link;

#[derive(clap::Args)]
pub struct Args {
    /// Share link for the story
    pub link: String,

    /// Use the shorter small-screen line length
    #[arg(long)]
    pub small: bool,

    /// Print chunks as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(catalog: &impl TemplateCatalog, env: &Env, args: Args) -> anyhow::Result<()> {
    let chunks = story_chunks(catalog, env, &args.link, args.small)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    for chunk in &chunks {
        println!("{}", styled(&highlighted_line(chunk)));
    }
    Ok(())
}

/// Decode `link`, render its story and split it into caption chunks.
pub fn story_chunks(
    catalog: &impl TemplateCatalog,
    env: &Env,
    link: &str,
    small: bool,
) -> anyhow::Result<Vec<CaptionChunk>> {
    let link = parse_link(link)?;
    let story = render_story(catalog, link.story())?;
    Ok(Chunker::new(env.chunk_policy()).chunk_story(&story, link.story(), small))
}

/// Highlighted runs in bold yellow, the rest as-is.
pub fn styled(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| {
            if segment.highlighted {
                segment.text.as_str().bold().yellow().to_string()
            } else {
                segment.text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
