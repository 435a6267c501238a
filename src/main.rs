//! Terminal tile-match runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input
//! and a framebuffer-based renderer, and acts as a free "economy layer":
//! boosters activate on first request instead of asking for currency.

use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_triples::core::GameState;
use tui_triples::engine::{apply_booster, apply_buffer_click, apply_click, apply_restart};
use tui_triples::input::{handle_key_event, should_quit, UiAction};
use tui_triples::term::{GameView, Hud, TerminalRenderer, Viewport};
use tui_triples::types::{BoosterKind, GamePhase, TileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunConfig {
    seed: u32,
    level: u32,
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig {
        // Low-entropy but adequate: one deal per process.
        seed: std::process::id(),
        level: 1,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--level" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --level"))?;
                config.level = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --level value: {}", v))?;
                if config.level == 0 {
                    return Err(anyhow!("--level must be 1 or greater"));
                }
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: RunConfig) -> Result<()> {
    let mut game = GameState::new(config.seed);
    game.init_level(config.level);

    let view = GameView::default();
    let mut selected: usize = 0;
    let mut hud = Hud::default();

    loop {
        let clickable = game.clickable_ids();
        if !clickable.is_empty() {
            selected = selected.min(clickable.len() - 1);
        }
        hud.selected = selection(&clickable, selected);

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, &hud, Viewport::new(w, h));
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        let Some(action) = handle_key_event(key) else {
            continue;
        };

        hud.notice = None;
        match action {
            UiAction::SelectPrev => {
                if !clickable.is_empty() {
                    selected = (selected + clickable.len() - 1) % clickable.len();
                }
            }
            UiAction::SelectNext => {
                if !clickable.is_empty() {
                    selected = (selected + 1) % clickable.len();
                }
            }
            UiAction::Pick => {
                if let Some(id) = selection(&clickable, selected) {
                    report(&mut hud, apply_click(&mut game, id));
                }
            }
            UiAction::BufferPick => {
                if let Some(&id) = game.buffer().first() {
                    report(&mut hud, apply_buffer_click(&mut game, id));
                } else {
                    hud.notice = Some("buffer is empty".to_string());
                }
            }
            UiAction::MoveOut => {
                request_booster(&mut game, BoosterKind::MoveOut, &mut hud);
            }
            UiAction::Undo => {
                request_booster(&mut game, BoosterKind::Undo, &mut hud);
            }
            UiAction::Shuffle => {
                request_booster(&mut game, BoosterKind::Shuffle, &mut hud);
            }
            UiAction::Restart => {
                report(&mut hud, apply_restart(&mut game));
            }
            UiAction::NextLevel => {
                if game.phase() == GamePhase::Won {
                    game.init_level(game.level() + 1);
                    hud.event = None;
                } else {
                    hud.notice = Some("clear the board first".to_string());
                }
            }
        }

        if let Some(event) = game.take_last_event() {
            hud.event = Some(event);
        }
    }
}

fn selection(clickable: &[TileId], selected: usize) -> Option<TileId> {
    clickable.get(selected).copied()
}

/// Stand-in for the economy collaborator: activate for free, then run.
fn request_booster(game: &mut GameState, kind: BoosterKind, hud: &mut Hud) {
    game.activate_booster(kind);
    report(hud, apply_booster(game, kind));
}

fn report(hud: &mut Hud, result: Result<(), tui_triples::engine::ActError>) {
    if let Err(err) = result {
        hud.notice = Some(err.message().to_string());
    }
}
