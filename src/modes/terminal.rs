use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;

pub type Tui = Terminal<CrosstermBackend<Stderr>>;

/// Redraw rate shared by all games (about 30 FPS)
pub const RENDER_INTERVAL: Duration = Duration::from_millis(33);

/// Switch to raw mode on the alternate screen
pub fn enter() -> Result<Tui> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Undo [`enter`]
pub fn leave(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Seeded when a seed is configured, otherwise from OS entropy
pub fn game_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
