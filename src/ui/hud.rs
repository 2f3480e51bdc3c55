use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::game::GameSession;
use crate::sound::MusicTrack;
use crate::theme::Palette;

/// Supplemental values displayed by the HUD row and overlays.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub high_score: u32,
    /// Whether the just-finished game set the high score.
    ///
    /// Carried separately because `high_score` has already absorbed a
    /// record-setting final score by the time the overlay draws.
    pub new_record: bool,
    pub palette: Palette,
    pub track: MusicTrack,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &GameSession, info: HudInfo) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let left = format!(
        "Score {}   Hi {}   Level {}",
        session.score, info.high_score, session.speed_level
    );
    let right = format!("{} · {}", info.palette.name, info.track.label());

    frame.render_widget(
        Paragraph::new(status_line(&left, &right, usize::from(status_area.width)))
            .style(Style::default().fg(info.palette.body)),
        status_area,
    );

    play_area
}

/// Joins left- and right-aligned HUD halves, padding by display width.
///
/// The track label contains a non-ASCII note glyph, so padding has to go
/// by rendered width rather than char count. Drops the right half when
/// the terminal is too narrow for both.
fn status_line(left: &str, right: &str, width: usize) -> String {
    let used = left.width() + right.width();
    if used >= width {
        return left.to_string();
    }
    format!("{left}{}{right}", " ".repeat(width - used))
}
