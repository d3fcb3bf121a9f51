use std::io::Write;

use chortle_teleprompter::{Scheduler, SchedulerSnapshot, TeleprompterState};
use chortle_template::TemplateCatalog;
use crossterm::{
    cursor, execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};

use super::captions::{story_chunks, styled};
use crate::env::Env;

#[derive(clap::Args)]
pub struct Args {
    /// Share link for the story
    pub link: String,

    /// Use the shorter small-screen line length
    #[arg(long)]
    pub small: bool,

    /// Milliseconds between lines, overriding CHORTLE_REVEAL_INTERVAL_MS
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

pub async fn run(catalog: &impl TemplateCatalog, env: &Env, args: Args) -> anyhow::Result<()> {
    let chunks = story_chunks(catalog, env, &args.link, args.small)?;
    let cadence = args
        .interval_ms
        .map(chortle_teleprompter::Cadence::from_millis)
        .unwrap_or_else(|| env.cadence());

    let mut scheduler = Scheduler::new(cadence);
    let mut rx = scheduler.subscribe();
    if !scheduler.start(chunks) {
        println!("(nothing to read)");
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    loop {
        let snapshot = rx.borrow_and_update().clone();
        draw(&mut stdout, &snapshot)?;
        if snapshot.state != TeleprompterState::Running {
            break;
        }

        tokio::select! {
            changed = rx.changed() => changed?,
            _ = tokio::signal::ctrl_c() => {
                scheduler.stop();
                break;
            }
        }
    }

    println!();
    Ok(())
}

fn draw(out: &mut impl Write, snapshot: &SchedulerSnapshot) -> anyhow::Result<()> {
    let Some(frame) = &snapshot.frame else {
        return Ok(());
    };

    execute!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    writeln!(out, "{}", frame.previous.as_deref().unwrap_or("").dim())?;
    writeln!(out, "{}", styled(&frame.current))?;
    writeln!(out, "{}", frame.next.as_deref().unwrap_or("").dim())?;
    writeln!(out)?;
    writeln!(out, "{}", format!("{}/{}", frame.index + 1, frame.total).dim())?;
    out.flush()?;
    Ok(())
}
