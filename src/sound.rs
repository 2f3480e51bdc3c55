use std::io::{self, Write};

use clap::ValueEnum;

/// Selectable background track, including "no music".
///
/// Consumed only by the audio collaborator and the HUD footer; the
/// simulation never reasons about it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default, ValueEnum)]
pub enum MusicTrack {
    #[default]
    None,
    Ukulele,
    Sunny,
    Dance,
}

impl MusicTrack {
    /// Returns the track after this one in cycle order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::None => Self::Ukulele,
            Self::Ukulele => Self::Sunny,
            Self::Sunny => Self::Dance,
            Self::Dance => Self::None,
        }
    }

    /// Returns the HUD label for this track.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "no music",
            Self::Ukulele => "♪ Ukulele",
            Self::Sunny => "♪ Sunny",
            Self::Dance => "♪ Dance",
        }
    }
}

/// Terminal audio collaborator.
///
/// The terminal bell is the only audio device available, so the eat and
/// game-over cues ring it; the selected background track is cosmetic
/// state surfaced in the HUD. Output failures are logged and never reach
/// the simulation.
#[derive(Debug)]
pub struct SoundPlayer {
    muted: bool,
    track: MusicTrack,
}

impl SoundPlayer {
    /// Creates a player with the given mute state and track selection.
    #[must_use]
    pub fn new(muted: bool, track: MusicTrack) -> Self {
        Self { muted, track }
    }

    /// Returns the selected background track.
    #[must_use]
    pub fn track(&self) -> MusicTrack {
        self.track
    }

    /// Advances to the next background track in cycle order.
    pub fn cycle_track(&mut self) {
        self.track = self.track.next();
    }

    /// Cue for food eaten.
    pub fn food_eaten(&self) {
        self.ring();
    }

    /// Cue for game over.
    pub fn game_over(&self) {
        self.ring();
    }

    fn ring(&self) {
        if self.muted {
            return;
        }
        if let Err(error) = ring_bell() {
            eprintln!("audio cue failed: {error}");
        }
    }
}

fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::{MusicTrack, SoundPlayer};

    #[test]
    fn track_cycle_wraps_back_to_none() {
        let mut track = MusicTrack::None;
        for _ in 0..4 {
            track = track.next();
        }
        assert_eq!(track, MusicTrack::None);
    }

    #[test]
    fn cycling_the_player_changes_its_track() {
        let mut player = SoundPlayer::new(true, MusicTrack::None);
        player.cycle_track();
        assert_eq!(player.track(), MusicTrack::Ukulele);
    }

    #[test]
    fn muted_player_cues_are_silent_no_ops() {
        let player = SoundPlayer::new(true, MusicTrack::None);
        player.food_eaten();
        player.game_over();
    }
}
