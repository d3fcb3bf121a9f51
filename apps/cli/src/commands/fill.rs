use std::collections::HashMap;

use chortle_codec::ShareLink;
use chortle_template::{Error, TemplateCatalog, fill, fill_html};
use url::Url;

#[derive(clap::Args)]
pub struct Args {
    /// Template key, as listed by `templates`
    pub template: String,

    /// An answer for one blank, as `name=value`. Repeat for each blank.
    #[arg(long, value_parser = parse_answer)]
    pub set: Vec<(String, String)>,

    /// Print the story as HTML with answers wrapped in `<strong>`
    #[arg(long)]
    pub html: bool,

    /// Print a full share URL on this base instead of a bare fragment
    #[arg(long, env = "CHORTLE_BASE_URL")]
    pub base_url: Option<Url>,
}

fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got `{raw}`"))?;
    Ok((name.trim().to_string(), value.to_string()))
}

pub fn run(catalog: &impl TemplateCatalog, args: Args) -> anyhow::Result<()> {
    let template = catalog
        .get(&args.template)
        .ok_or_else(|| Error::UnknownTemplate(args.template.clone()))?;

    let answers: HashMap<String, String> = args.set.into_iter().collect();
    let record = template.build_record(&answers)?;

    let story = if args.html {
        fill_html(&template.text, &record)
    } else {
        fill(&template.text, &record)
    };
    println!("{story}");
    println!();

    let link = ShareLink::Story(record);
    match args.base_url {
        Some(base) => println!("{}", link.apply_to(&base)?),
        None => println!("#{}", link.to_fragment()?),
    }
    Ok(())
}
