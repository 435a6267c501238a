//! Session persistence tests - save, load, resume, reject.

use tui_triples::adapter::{load_session, save_session, SessionRecord, SESSION_FORMAT_VERSION};
use tui_triples::core::GameState;
use tui_triples::types::{BoosterKind, GamePhase};

fn mid_game() -> GameState {
    let mut state = GameState::new(31337);
    state.init_level(2);
    state.activate_booster(BoosterKind::MoveOut);
    state.activate_booster(BoosterKind::Undo);
    // Slot a few tiles so slots, history, and statuses are non-trivial.
    for _ in 0..3 {
        let ids = state.clickable_ids();
        state.click_tile(ids[0]);
    }
    state.take_last_event();
    state
}

#[test]
fn test_save_load_round_trip() {
    let state = mid_game();
    let json = save_session(&state).unwrap();
    let loaded = load_session(&json).unwrap();

    assert_eq!(loaded.snapshot(), state.snapshot());
    assert_eq!(loaded.level(), state.level());
    assert_eq!(loaded.phase(), state.phase());
    assert_eq!(loaded.slots(), state.slots());
    assert_eq!(loaded.buffer(), state.buffer());
    assert_eq!(loaded.history().len(), state.history().len());
    assert_eq!(
        loaded.boosters().is_activated(BoosterKind::MoveOut),
        state.boosters().is_activated(BoosterKind::MoveOut)
    );
}

#[test]
fn test_resumed_session_plays_on_identically() {
    let mut original = mid_game();
    let json = save_session(&original).unwrap();
    let mut resumed = load_session(&json).unwrap();

    // Drive both with the same inputs; they stay in lockstep, including
    // the RNG-dependent shuffle.
    original.activate_booster(BoosterKind::Shuffle);
    resumed.activate_booster(BoosterKind::Shuffle);
    assert_eq!(original.shuffle(), resumed.shuffle());

    let ids = original.clickable_ids();
    assert_eq!(ids, resumed.clickable_ids());
    original.click_tile(ids[0]);
    resumed.click_tile(ids[0]);
    assert_eq!(original.snapshot(), resumed.snapshot());
}

#[test]
fn test_undo_survives_a_round_trip() {
    let state = mid_game();
    let json = save_session(&state).unwrap();
    let mut resumed = load_session(&json).unwrap();

    // History crossed the serialization boundary intact.
    assert!(resumed.undo());
    assert_eq!(resumed.phase(), GamePhase::Playing);
    assert_eq!(resumed.history().len(), state.history().len() - 1);
}

#[test]
fn test_not_started_session_round_trips() {
    let state = GameState::new(1);
    let json = save_session(&state).unwrap();
    let loaded = load_session(&json).unwrap();
    assert_eq!(loaded.phase(), GamePhase::NotStarted);
    assert_eq!(loaded.level(), 0);
}

#[test]
fn test_version_gate() {
    let state = mid_game();
    let mut record = SessionRecord::from_snapshot(&state.snapshot());
    record.version = SESSION_FORMAT_VERSION + 1;
    let json = serde_json::to_string(&record).unwrap();
    let err = load_session(&json).unwrap_err();
    assert!(err.to_string().contains("version"));
}

#[test]
fn test_rejects_dangling_buffer_reference() {
    let state = mid_game();
    let mut record = SessionRecord::from_snapshot(&state.snapshot());
    record.buffer.push(123_456);
    let json = serde_json::to_string(&record).unwrap();
    assert!(load_session(&json).is_err());
}

#[test]
fn test_rejects_malformed_json() {
    assert!(load_session("").is_err());
    assert!(load_session("[1, 2, 3]").is_err());
    assert!(load_session("{\"version\": 1}").is_err());
}
