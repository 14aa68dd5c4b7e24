//! Browser surface

use chrono::{NaiveDate, NaiveDateTime};
use pn_desktop::{InputResult, Menu, ShellConfig};
use pn_panels::ServiceAction;
use wasm_bindgen::prelude::*;

use crate::host::PanelCommand;
use crate::shell::Shell;

fn js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Wall-clock time from the browser, for `date` and `time`
fn local_now() -> NaiveDateTime {
    let date = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        date.get_full_year() as i32,
        date.get_month() + 1,
        date.get_date(),
    )
    .and_then(|day| day.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
    .unwrap_or_default()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn handled(result: InputResult) -> bool {
    result == InputResult::Handled
}

/// Shell handle for a browser view layer. State comes back as JSON.
#[wasm_bindgen]
pub struct WasmShell {
    shell: Shell,
}

#[wasm_bindgen]
impl WasmShell {
    /// Create a shell. `config_json` may be empty for the stock config.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<WasmShell, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = if config_json.trim().is_empty() {
            ShellConfig::default()
        } else {
            ShellConfig::from_json(config_json).map_err(js_err)?
        };
        let mut seed = [0u8; 8];
        getrandom::getrandom(&mut seed).map_err(js_err)?;

        Ok(WasmShell {
            shell: Shell::new(config, u64::from_le_bytes(seed)),
        })
    }

    pub fn init(&mut self, width: f32, height: f32) {
        self.shell.init(width, height);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.shell.resize(width, height);
    }

    pub fn login(&mut self, credential: &str) -> bool {
        self.shell.login(credential).is_ok()
    }

    pub fn shutdown(&mut self) -> Result<(), JsValue> {
        self.shell.shutdown(now_ms()).map_err(js_err)
    }

    /// Call once per animation frame. Returns true when a shutdown completed.
    pub fn tick(&mut self) -> bool {
        self.shell.tick(now_ms())
    }

    /// Returns the new window id, or -1 when the tool is not available
    pub fn open_tool(&mut self, name: &str) -> f64 {
        self.shell
            .open_tool(name, now_ms())
            .map(|id| id as f64)
            .unwrap_or(-1.0)
    }

    pub fn open_desktop_icon(&mut self, name: &str) -> f64 {
        self.shell
            .open_desktop_icon(name, now_ms())
            .map(|id| id as f64)
            .unwrap_or(-1.0)
    }

    pub fn select_menu_tool(&mut self, name: &str) -> f64 {
        self.shell
            .select_menu_tool(name, now_ms())
            .map(|id| id as f64)
            .unwrap_or(-1.0)
    }

    pub fn close_window(&mut self, id: u64) -> bool {
        matches!(self.shell.close_window(id), Ok(change) if change.is_applied())
    }

    pub fn focus_window(&mut self, id: u64) -> bool {
        matches!(self.shell.focus_window(id), Ok(change) if change.is_applied())
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        handled(self.shell.pointer_down(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        handled(self.shell.pointer_move(x, y))
    }

    pub fn pointer_up(&mut self) -> bool {
        handled(self.shell.pointer_up())
    }

    pub fn start_move_drag(&mut self, id: u64, x: f32, y: f32) -> bool {
        handled(self.shell.start_move_drag(id, x, y))
    }

    pub fn click_start_button(&mut self) {
        self.shell.click_start_button();
    }

    pub fn start_menu_shutdown(&mut self) -> Result<(), JsValue> {
        self.shell.start_menu_shutdown(now_ms()).map_err(js_err)
    }

    /// `"manage"` or `"tools"`
    pub fn click_menu(&mut self, menu: &str) {
        match menu {
            "manage" => self.shell.click_menu(Menu::Manage),
            "tools" => self.shell.click_menu(Menu::Tools),
            _ => {}
        }
    }

    pub fn manage_menu_shutdown(&mut self) -> Result<(), JsValue> {
        self.shell.manage_menu_shutdown(now_ms()).map_err(js_err)
    }

    pub fn dismiss_notice(&mut self) {
        self.shell.dismiss_notice();
    }

    pub fn console_submit(&mut self, id: u64, line: &str) -> Result<(), JsValue> {
        self.shell
            .console_submit(id, line, local_now())
            .map(|_| ())
            .map_err(js_err)
    }

    pub fn console_history_up(&mut self, id: u64) -> Option<String> {
        self.shell.console_history_up(id)
    }

    pub fn console_history_down(&mut self, id: u64) -> Option<String> {
        self.shell.console_history_down(id)
    }

    /// Panel buttons: `select-server`, `select-service`, `start`, `stop`,
    /// `restart`, `scan`, `clean`, `optimize`
    pub fn panel_command(&mut self, id: u64, command: &str, arg: &str) -> Result<(), JsValue> {
        let command = match command {
            "select-server" => PanelCommand::SelectServer(arg.to_string()),
            "select-service" => PanelCommand::SelectService(arg.to_string()),
            "start" => PanelCommand::Service(ServiceAction::Start),
            "stop" => PanelCommand::Service(ServiceAction::Stop),
            "restart" => PanelCommand::Service(ServiceAction::Restart),
            "scan" => PanelCommand::ScanDisk,
            "clean" => PanelCommand::CleanDisk,
            "optimize" => PanelCommand::OptimizeDrives,
            other => return Err(JsValue::from_str(&format!("unknown panel command: {}", other))),
        };
        self.shell
            .panel_command(id, command, now_ms())
            .map(|_| ())
            .map_err(js_err)
    }

    /// Full view state as JSON
    pub fn snapshot(&self) -> Result<String, JsValue> {
        self.shell.snapshot_json().map_err(js_err)
    }
}
