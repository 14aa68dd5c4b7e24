//! Desktop Engine Integration Tests
//!
//! Drives the engine through its public entry points the way a view layer
//! would: login, chrome clicks, pointer events, timed shutdown.

use pn_desktop::{
    Change, DesktopEngine, DesktopError, InputResult, Menu, SessionMode, ShellConfig, Size, Vec2,
};

fn logged_in() -> DesktopEngine {
    let mut engine = DesktopEngine::new();
    engine.init(1280.0, 800.0);
    engine.login("0000").unwrap();
    engine
}

/// Dragging moves the window by exactly the pointer delta.
#[test]
fn test_drag_round_trip() {
    let mut engine = logged_in();
    let id = engine.open_tool("Resource Monitor").unwrap();
    let before = engine.windows.get(id).unwrap().position;

    let p0 = Vec2::new(before.x + 200.0, before.y + 12.0);
    let p1 = Vec2::new(p0.x - 37.5, p0.y + 410.0);

    assert_eq!(engine.handle_pointer_down(p0.x, p0.y), InputResult::Handled);
    engine.handle_pointer_move(p1.x, p1.y);

    let after = engine.windows.get(id).unwrap().position;
    assert!((after.x - (before.x + (p1.x - p0.x))).abs() < 0.001);
    assert!((after.y - (before.y + (p1.y - p0.y))).abs() < 0.001);

    engine.handle_pointer_up();
    assert_eq!(engine.handle_pointer_move(5.0, 5.0), InputResult::Unhandled);
    assert_eq!(engine.windows.get(id).unwrap().position, after);
}

/// Windows may be dragged off-screen.
#[test]
fn test_drag_is_not_clamped() {
    let mut engine = logged_in();
    let id = engine.open_tool("Services").unwrap();

    engine.start_move_drag(id, 60.0, 60.0);
    engine.handle_pointer_move(-2000.0, 5000.0);
    engine.handle_pointer_up();

    let pos = engine.windows.get(id).unwrap().position;
    assert_eq!(pos, Vec2::new(-2010.0, 4990.0));
}

/// Closing the dragged window mid-gesture turns later moves into no-ops.
#[test]
fn test_close_during_drag() {
    let mut engine = logged_in();
    let id = engine.open_tool("Services").unwrap();

    engine.start_move_drag(id, 60.0, 60.0);
    assert_eq!(engine.close_window(id).unwrap(), Change::Applied);

    engine.handle_pointer_move(300.0, 300.0);
    assert_eq!(engine.handle_pointer_up(), InputResult::Handled);
    assert_eq!(engine.windows.count(), 0);
}

/// Starting a drag raises the window.
#[test]
fn test_drag_start_focuses() {
    let mut engine = logged_in();
    let a = engine.open_tool("Services").unwrap();
    let b = engine.open_tool("Event Viewer").unwrap();
    assert_eq!(engine.windows.focused(), Some(b));

    engine.start_move_drag(a, 100.0, 60.0);
    assert_eq!(engine.windows.focused(), Some(a));
}

/// Shutdown empties the store but ids keep climbing.
#[test]
fn test_shutdown_clears_state_and_keeps_ids() {
    let mut engine = logged_in();
    for name in ["Services", "Command Prompt", "Server Manager"] {
        engine.open_tool(name).unwrap();
    }

    engine.click_menu(Menu::Manage);
    engine.manage_menu_shutdown(10_000.0).unwrap();
    assert_eq!(engine.mode(), SessionMode::ShuttingDown);
    assert!(engine.open_tool("Services").is_err());

    engine.tick(11_499.0);
    assert_eq!(engine.mode(), SessionMode::ShuttingDown);
    assert!(engine.tick(11_500.0));

    assert_eq!(engine.mode(), SessionMode::LoggedOut);
    assert_eq!(engine.windows.count(), 0);
    assert_eq!(engine.chrome.open_menu(), None);

    engine.login("0000").unwrap();
    let id = engine.open_tool("Services").unwrap();
    assert_eq!(id, 3);
}

/// Opening an unimplemented tool from the menu changes nothing.
#[test]
fn test_unimplemented_menu_tool() {
    let mut engine = logged_in();
    engine.open_tool("Services").unwrap();
    engine.click_menu(Menu::Tools);

    let err = engine.select_menu_tool("Print Management").unwrap_err();
    assert!(matches!(err, DesktopError::ToolNotAvailable(_)));
    assert_eq!(engine.windows.count(), 1);
    assert!(engine.notice().is_some());
    assert_eq!(engine.chrome.open_menu(), None);
}

/// Near-fullscreen sizing follows the screen at open time.
#[test]
fn test_server_manager_uses_screen_size() {
    let mut engine = logged_in();
    let id = engine.open_desktop_icon("Server Manager").unwrap();
    assert_eq!(engine.windows.get(id).unwrap().size, Size::new(1180.0, 650.0));

    engine.resize(1600.0, 900.0);
    assert_eq!(engine.windows.get(id).unwrap().size, Size::new(1180.0, 650.0));
    let id2 = engine.open_desktop_icon("Server Manager").unwrap();
    assert_eq!(engine.windows.get(id2).unwrap().size, Size::new(1500.0, 750.0));
}

/// A custom password from config replaces the default.
#[test]
fn test_custom_password() {
    let config = ShellConfig::from_json(r#"{ "password": "letmein", "shutdown_delay_ms": 0 }"#)
        .unwrap();
    let mut engine = DesktopEngine::with_config(config);

    assert_eq!(engine.login("0000"), Err(DesktopError::IncorrectPassword));
    assert_eq!(engine.session.login_error(), Some("Incorrect password."));
    engine.login("letmein").unwrap();

    engine.shutdown(1.0).unwrap();
    assert!(engine.tick(1.0));
}
