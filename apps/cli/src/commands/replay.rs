use std::io::Write;

use readalong_highlight::Error;
use readalong_recording_client::Prepared;

use crate::{config::Settings, runtime::SessionRuntime, surface::ConsoleSurface};

/// Play the recording start to end on the simulated clock, writing every
/// highlight change to `out`. Ticks are applied back to back, without waiting.
pub fn replay<W: Write>(prepared: Prepared, settings: &Settings, out: W) -> Result<W, Error> {
    let (surface, handles) = ConsoleSurface::render(prepared.words, out);
    let mut runtime = SessionRuntime::new(prepared.timings, handles, surface, settings);

    runtime.toggle_playback()?;
    let mut ticks = 0usize;
    while !runtime.advance(settings.tick) {
        ticks += 1;
        if !runtime.session().is_playing() {
            break;
        }
    }

    tracing::info!(ticks, "replay_finished");
    Ok(runtime.into_surface().into_inner())
}
