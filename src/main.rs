//! Terminal demo: animate one text value into another.
//!
//! Usage: `rune-odometer [OLD] [NEW]`. Missing arguments fall back to
//! `rune.toml` and then to `99` → `100`.

mod terminal;

use anyhow::{bail, Context, Result};
use rune_config::RuneConfig;
use rune_morph::{MorphState, TextMorph};
use rune_text::FixedAdvanceLayout;

use crate::terminal::TerminalSurface;

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let config = RuneConfig::load();
    let mut args = std::env::args().skip(1);
    let old_text = args
        .next()
        .or_else(|| config.demo.old_text.clone())
        .unwrap_or_else(|| "99".to_string());
    let new_text = args
        .next()
        .or_else(|| config.demo.new_text.clone())
        .unwrap_or_else(|| "100".to_string());

    let frame_ms = config.demo.frame_ms;
    if !(frame_ms.is_finite() && frame_ms > 0.0) {
        bail!("frame interval must be positive, got {frame_ms}ms");
    }

    let mut morph = TextMorph::new(FixedAdvanceLayout::default(), config.morph, old_text)
        .context("invalid morph configuration")?;
    morph.set_text(new_text);
    log::info!(
        "animating {:?} -> {:?} over {:.0}ms",
        morph.old_text(),
        morph.new_text(),
        morph.timeline().total_duration_ms
    );

    let stdout = std::io::stdout();
    let mut surface = TerminalSurface::new(stdout.lock());
    morph.render(&mut surface)?;
    while morph.tick(frame_ms) == MorphState::Animating {
        morph.render(&mut surface)?;
    }
    morph.render(&mut surface)?;

    log::info!("rendered {} frames", surface.frames());
    Ok(())
}
