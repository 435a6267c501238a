//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout: the stacked board on the left (painted in ascending z so higher
//! tiles overdraw lower ones, exactly like the occlusion rule), the slot
//! bar and buffer row underneath, and a status sidebar on the right.

use crate::core::{GameState, Tile};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    GameEvent, GamePhase, TileId, TileKind, ALL_BOOSTERS, LATTICE_MAX_X, LATTICE_MAX_Y,
    SLOT_CAPACITY, TILE_SPAN,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-side state that is not the engine's business: the current
/// selection, the last feedback cue, and an optional one-line notice.
#[derive(Debug, Clone, Default)]
pub struct Hud {
    pub selected: Option<TileId>,
    pub event: Option<GameEvent>,
    pub notice: Option<String>,
}

/// A lightweight terminal renderer for the tile board.
pub struct GameView {
    /// Half-unit width in terminal columns.
    cell_w: u16,
    /// Half-unit height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Board width in terminal columns (excluding border).
    fn board_px_w(&self) -> u16 {
        (LATTICE_MAX_X as u16 + TILE_SPAN as u16) * self.cell_w
    }

    /// Board height in terminal rows (excluding border).
    fn board_px_h(&self) -> u16 {
        (LATTICE_MAX_Y as u16 + TILE_SPAN as u16) * self.cell_h
    }

    /// Render the current game state into a framebuffer.
    pub fn render(&self, state: &GameState, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let origin_x: u16 = 1;
        let origin_y: u16 = 1;

        self.draw_border(&mut fb, origin_x - 1, origin_y - 1);
        self.draw_board(&mut fb, state, hud.selected, origin_x, origin_y);

        let slot_y = origin_y + self.board_px_h() + 1;
        self.draw_tile_row(&mut fb, state, state.slots(), "SLOT", origin_x, slot_y);
        self.draw_tile_row(
            &mut fb,
            state,
            state.buffer(),
            "BUFF",
            origin_x,
            slot_y + 1,
        );

        let sidebar_x = origin_x + self.board_px_w() + 3;
        self.draw_sidebar(&mut fb, state, hud, sidebar_x, origin_y);

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let w = self.board_px_w() + 2;
        let h = self.board_px_h() + 2;
        for dx in 0..w {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 0..h {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
    }

    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        selected: Option<TileId>,
        origin_x: u16,
        origin_y: u16,
    ) {
        // Paint order is the occlusion order: lowest z first.
        let mut board: Vec<&Tile> = state.tiles().iter().filter(|t| t.is_on_board()).collect();
        board.sort_by_key(|t| (t.z, t.id));

        for tile in board {
            let style = self.tile_style(tile, selected);
            let tx = origin_x + (tile.x as u16) * self.cell_w;
            let ty = origin_y + (tile.y as u16) * self.cell_h;
            let tw = (TILE_SPAN as u16) * self.cell_w;
            let th = (TILE_SPAN as u16) * self.cell_h;
            fb.fill_rect(tx, ty, tw, th, ' ', style);
            // Glyph roughly centered on the footprint.
            fb.put_char(tx + tw / 2 - 1, ty + th / 2, tile.kind.symbol(), style);
            if selected == Some(tile.id) {
                fb.put_char(tx, ty + th / 2, '[', style);
                fb.put_char(tx + tw - 1, ty + th / 2, ']', style);
            }
        }
    }

    fn tile_style(&self, tile: &Tile, selected: Option<TileId>) -> CellStyle {
        let base = kind_color(tile.kind);
        if selected == Some(tile.id) {
            CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: base,
                bold: true,
                dim: false,
            }
        } else if tile.locked {
            // Occluded tiles read as shadowed.
            CellStyle {
                fg: Rgb::new(40, 40, 40),
                bg: dimmed(base),
                bold: false,
                dim: true,
            }
        } else {
            CellStyle {
                fg: Rgb::new(10, 10, 10),
                bg: base,
                bold: false,
                dim: false,
            }
        }
    }

    fn draw_tile_row(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        ids: &[TileId],
        label: &str,
        x: u16,
        y: u16,
    ) {
        let label_style = CellStyle::default();
        fb.put_str(x, y, label, label_style);

        let start = x + label.len() as u16 + 1;
        for i in 0..SLOT_CAPACITY {
            let cx = start + (i as u16) * 4;
            match ids.get(i).and_then(|&id| state.tile(id)) {
                Some(tile) => {
                    let style = CellStyle {
                        fg: Rgb::new(10, 10, 10),
                        bg: kind_color(tile.kind),
                        bold: false,
                        dim: false,
                    };
                    fb.put_char(cx, y, '[', label_style);
                    fb.put_char(cx + 1, y, tile.kind.symbol(), style);
                    fb.put_char(cx + 2, y, ']', label_style);
                }
                None => {
                    fb.put_str(cx, y, "[.]", label_style);
                }
            }
        }
    }

    fn draw_sidebar(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        hud: &Hud,
        x: u16,
        y: u16,
    ) {
        let style = CellStyle::default();
        let mut line = y;

        fb.put_str(x, line, &format!("LEVEL {}", state.level()), style);
        line += 1;
        fb.put_str(x, line, &format!("LEFT  {}", state.remaining()), style);
        line += 1;
        fb.put_str(
            x,
            line,
            &format!("SLOTS {}/{}", state.slots().len(), SLOT_CAPACITY),
            style,
        );
        line += 2;

        let banner = match state.phase() {
            GamePhase::NotStarted => "PRESS r TO DEAL",
            GamePhase::Playing => "",
            GamePhase::Won => "BOARD CLEARED!",
            GamePhase::Lost => "SLOT ROW FULL",
        };
        if !banner.is_empty() {
            let banner_style = CellStyle {
                fg: Rgb::new(255, 255, 255),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            };
            fb.put_str(x, line, banner, banner_style);
        }
        line += 2;

        for kind in ALL_BOOSTERS {
            let flags = state.boosters().state(kind);
            let status = if flags.used {
                "used"
            } else if flags.activated {
                "ready"
            } else {
                "locked"
            };
            fb.put_str(x, line, &format!("{:<9} {}", kind.as_str(), status), style);
            line += 1;
        }
        line += 1;

        if let Some(event) = hud.event {
            fb.put_str(x, line, &format!("* {}", event.as_str()), style);
        }
        line += 1;
        if let Some(notice) = &hud.notice {
            fb.put_str(x, line, notice, style);
        }
        line += 2;

        for help in [
            "arrows  select",
            "space   pick",
            "b       buffer pick",
            "m/u/s   boosters",
            "r       restart",
            "n       next level",
            "q       quit",
        ] {
            fb.put_str(x, line, help, style);
            line += 1;
        }
    }
}

fn kind_color(kind: TileKind) -> Rgb {
    match kind {
        TileKind::Carrot => Rgb::new(230, 126, 34),
        TileKind::Corn => Rgb::new(241, 196, 15),
        TileKind::Wheat => Rgb::new(210, 180, 100),
        TileKind::Grass => Rgb::new(46, 204, 113),
        TileKind::Log => Rgb::new(121, 85, 61),
        TileKind::Wool => Rgb::new(236, 240, 241),
        TileKind::Milk => Rgb::new(200, 214, 229),
        TileKind::Bell => Rgb::new(255, 215, 0),
        TileKind::Berry => Rgb::new(192, 57, 43),
        TileKind::Mushroom => Rgb::new(155, 89, 182),
        TileKind::Pumpkin => Rgb::new(211, 84, 0),
        TileKind::Clover => Rgb::new(39, 174, 96),
        TileKind::Honey => Rgb::new(243, 156, 18),
        TileKind::Turnip => Rgb::new(149, 175, 192),
    }
}

fn dimmed(color: Rgb) -> Rgb {
    Rgb::new(color.r / 3, color.g / 3, color.b / 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoosterKind;

    fn contains_str(fb: &FrameBuffer, needle: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
                .collect();
            if row.contains(needle) {
                return true;
            }
        }
        false
    }

    fn contains_char(fb: &FrameBuffer, needle: char) -> bool {
        fb.cells().iter().any(|c| c.ch == needle)
    }

    fn rendered(state: &GameState) -> FrameBuffer {
        GameView::default().render(state, &Hud::default(), Viewport::new(80, 24))
    }

    #[test]
    fn renders_level_and_remaining() {
        let mut state = GameState::new(1);
        state.init_level(1);
        let fb = rendered(&state);
        assert!(contains_str(&fb, "LEVEL 1"));
        assert!(contains_str(&fb, "LEFT  9"));
        assert!(contains_str(&fb, "SLOTS 0/7"));
    }

    #[test]
    fn renders_board_tile_symbols() {
        let mut state = GameState::new(1);
        state.init_level(1);
        let fb = rendered(&state);
        // Every tutorial tile is unlocked and visible.
        for tile in state.tiles() {
            assert!(
                contains_char(&fb, tile.kind.symbol()),
                "missing symbol for {:?}",
                tile.kind
            );
        }
    }

    #[test]
    fn renders_slot_content_after_click() {
        let mut state = GameState::new(1);
        state.init_level(1);
        let id = state.clickable_ids()[0];
        let symbol = state.tile(id).unwrap().kind.symbol();
        state.click_tile(id);

        let fb = rendered(&state);
        assert!(contains_str(&fb, "SLOTS 1/7"));
        assert!(contains_char(&fb, symbol));
    }

    #[test]
    fn renders_won_banner() {
        let mut state = GameState::new(1);
        state.init_level(1);
        // Greedy tutorial clear: click everything kind by kind.
        loop {
            let ids = state.clickable_ids();
            if ids.is_empty() || state.phase() != GamePhase::Playing {
                break;
            }
            let kind = state.tile(ids[0]).map(|t| t.kind);
            for id in ids {
                if state.tile(id).map(|t| t.kind) == kind {
                    state.click_tile(id);
                }
            }
        }
        assert_eq!(state.phase(), GamePhase::Won);
        let fb = rendered(&state);
        assert!(contains_str(&fb, "BOARD CLEARED!"));
    }

    #[test]
    fn renders_booster_states() {
        let mut state = GameState::new(1);
        state.init_level(1);
        state.activate_booster(BoosterKind::Undo);
        let fb = rendered(&state);
        assert!(contains_str(&fb, "undo"));
        assert!(contains_str(&fb, "ready"));
        assert!(contains_str(&fb, "locked"));
    }

    #[test]
    fn renders_event_and_notice() {
        let mut state = GameState::new(1);
        state.init_level(1);
        let hud = Hud {
            selected: None,
            event: Some(GameEvent::Match),
            notice: Some("tile is occluded by a higher tile".to_string()),
        };
        let fb = GameView::default().render(&state, &hud, Viewport::new(80, 24));
        assert!(contains_str(&fb, "* match"));
        assert!(contains_str(&fb, "occluded"));
    }
}
