use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::RngCore;

use slither::config::{BOARD, INPUT_POLL_MS};
use slither::game::GameSession;
use slither::input::{poll_input, GameInput};
use slither::renderer;
use slither::scheduler::TickScheduler;
use slither::score::HighScoreStore;
use slither::sound::{MusicTrack, SoundPlayer};
use slither::terminal_runtime::TerminalSession;
use slither::theme::{next_palette, PaletteName};
use slither::ui::hud::HudInfo;

#[derive(Debug, Parser)]
#[command(version, about = "Grid-based terminal Snake with a score-driven speed ramp")]
struct Cli {
    /// Snake color preset.
    #[arg(long = "color", value_enum, default_value = "green")]
    color: PaletteName,

    /// Background track selection.
    #[arg(long = "music", value_enum, default_value = "none")]
    music: MusicTrack,

    /// Disable audio cues.
    #[arg(long = "muted")]
    muted: bool,

    /// Seed for food placement, for reproducible sessions.
    #[arg(long = "seed")]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let store = HighScoreStore::new();
    let high_score = match store.load() {
        Ok(score) => score,
        Err(error) => {
            // Absent file is Ok(0); this is a present-but-broken file.
            eprintln!("warning: ignoring saved high score: {error}");
            0
        }
    };

    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    let session = GameSession::new_with_seed(BOARD, seed);

    let mut terminal = TerminalSession::enter()?;
    run(terminal.terminal_mut(), cli, session, &store, high_score)
}

fn run(
    terminal: &mut slither::terminal_runtime::AppTerminal,
    cli: Cli,
    mut session: GameSession,
    store: &HighScoreStore,
    mut high_score: u32,
) -> io::Result<()> {
    let mut scheduler = TickScheduler::new(session.tick_interval());
    let mut sound = SoundPlayer::new(cli.muted, cli.music);
    let mut palette = cli.color.palette();
    let mut new_record = false;

    loop {
        terminal.draw(|frame| {
            renderer::render(
                frame,
                &session,
                HudInfo {
                    high_score,
                    new_record,
                    palette,
                    track: sound.track(),
                },
            )
        })?;

        if let Some(input) = poll_input(Duration::from_millis(INPUT_POLL_MS))? {
            match input {
                GameInput::Quit => break,
                GameInput::Direction(direction) => session.request_direction(direction),
                GameInput::Pause => session.toggle_pause(),
                GameInput::Confirm => {
                    if let Some(interval) = session.start() {
                        new_record = false;
                        scheduler.schedule(Instant::now(), interval);
                    }
                }
                GameInput::Restart => {
                    let interval = session.restart();
                    new_record = false;
                    scheduler.schedule(Instant::now(), interval);
                }
                GameInput::CyclePalette => palette = next_palette(palette),
                GameInput::CycleTrack => sound.cycle_track(),
            }
        }

        let now = Instant::now();
        if scheduler.poll(now) {
            let outcome = session.step();

            if outcome.ate_food {
                sound.food_eaten();
            }
            if let Some(interval) = outcome.new_tick_interval {
                scheduler.schedule(now, interval);
            }
            if let Some(final_score) = outcome.game_over {
                scheduler.cancel();
                sound.game_over();
                // Decide the record before absorbing it into high_score,
                // so the game-over overlay can still tell.
                new_record = final_score > high_score;
                if new_record {
                    high_score = final_score;
                    if let Err(error) = store.save(high_score) {
                        eprintln!("warning: failed to save high score: {error}");
                    }
                }
            }
        }
    }

    Ok(())
}
