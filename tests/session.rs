#[allow(dead_code)]
#[macro_use]
mod common;

use common::{ScriptedKeys, ctrl, key};
use crossterm::event::KeyCode;
use fzpick::tui::Tui;
use fzpick::{PickError, PickOptionsBuilder, Picker};
use ratatui::backend::TestBackend;

const ITEMS: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

fn test_tui() -> Tui<TestBackend> {
    Tui::with_backend(TestBackend::new(20, 6)).unwrap()
}

fn row(tui: &Tui<TestBackend>, y: u16) -> String {
    let buffer = tui.backend().buffer();
    let line: String = (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect();
    line.trim_end().to_string()
}

#[test]
fn session_single_select() {
    let mut tui = test_tui();
    let mut keys = ScriptedKeys::typed("ta", KeyCode::Enter);

    let picked = Picker::default().run_on(&mut tui, &mut keys, ITEMS).unwrap();

    assert_eq!(picked, ["beta"]);
    assert_eq!(keys.remaining(), 0);
    assert_eq!(row(&tui, 5), "> ta");
}

#[test]
fn session_multi_select_returns_input_order() {
    let options = PickOptionsBuilder::default().multi(true).build().unwrap();
    let mut tui = test_tui();
    let mut keys = ScriptedKeys::new([
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Tab),
        key(KeyCode::Up),
        key(KeyCode::Up),
        key(KeyCode::Up),
        key(KeyCode::Tab),
        key(KeyCode::Enter),
    ]);

    let picked = Picker::new(options).run_on(&mut tui, &mut keys, ITEMS).unwrap();

    assert_eq!(picked, ["alpha", "delta"]);
    assert_eq!(row(&tui, 4), "  4/4 [2]");
}

#[test]
fn session_multi_without_toggles_picks_current() {
    let options = PickOptionsBuilder::default().multi(true).build().unwrap();
    let mut tui = test_tui();
    let mut keys = ScriptedKeys::new([key(KeyCode::Down), key(KeyCode::Enter)]);

    let picked = Picker::new(options).run_on(&mut tui, &mut keys, ITEMS).unwrap();

    assert_eq!(picked, ["beta"]);
}

#[test]
fn session_abort() {
    for abort in [key(KeyCode::Esc), ctrl('c'), ctrl('g')] {
        let mut tui = test_tui();
        let mut keys = ScriptedKeys::new([key(KeyCode::Down), abort]);

        let err = Picker::default().run_on(&mut tui, &mut keys, ITEMS).unwrap_err();

        assert!(matches!(err, PickError::AbortedByUser), "{err}");
        assert!(err.is_abort());
    }
}

#[test]
fn session_empty_input_draws_nothing() {
    let mut tui = test_tui();
    let mut keys = ScriptedKeys::new([key(KeyCode::Enter)]);

    let err = Picker::default()
        .run_on(&mut tui, &mut keys, Vec::<String>::new())
        .unwrap_err();

    assert!(matches!(err, PickError::EmptyInput), "{err}");
    assert_eq!(keys.remaining(), 1);
    assert!((0..6).all(|y| row(&tui, y).is_empty()));
}

#[test]
fn session_accept_without_match() {
    let mut tui = test_tui();
    let mut keys = ScriptedKeys::typed("zzz", KeyCode::Enter);

    let err = Picker::default().run_on(&mut tui, &mut keys, ITEMS).unwrap_err();

    assert!(matches!(err, PickError::EmptyResult), "{err}");
    assert_eq!(row(&tui, 4), "  0/4");
}

#[test]
fn session_keys_run_out() {
    let mut tui = test_tui();
    let mut keys = ScriptedKeys::new("gam".chars().map(|c| key(KeyCode::Char(c))));

    let err = Picker::default().run_on(&mut tui, &mut keys, ITEMS).unwrap_err();

    assert!(matches!(err, PickError::Terminal(_)), "{err}");
    assert_eq!(row(&tui, 0), "> gamma");
    assert_eq!(row(&tui, 5), "> gam");
}

#[test]
fn session_initial_query() {
    let options = PickOptionsBuilder::default()
        .query(Some("el".to_string()))
        .build()
        .unwrap();
    let mut tui = test_tui();
    let mut keys = ScriptedKeys::new([key(KeyCode::Enter)]);

    let picked = Picker::new(options).run_on(&mut tui, &mut keys, ITEMS).unwrap();

    assert_eq!(picked, ["delta"]);
    assert_eq!(row(&tui, 4), "  1/4");
    assert_eq!(row(&tui, 5), "> el");
}
