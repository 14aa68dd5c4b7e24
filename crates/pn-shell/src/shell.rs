//! Desktop engine composed with its tool panels

use std::collections::HashMap;

use chrono::NaiveDateTime;
use pn_console::ConsoleAction;
use pn_desktop::{
    Change, DesktopEngine, DesktopIcon, DesktopResult, InputResult, Menu, SessionMode,
    ShellConfig, WindowId, WindowView, DESKTOP_ICONS, MENU_TOOLS,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ShellError, ShellResult};
use crate::host::{PanelCommand, PanelHost, PanelView, Routed};

/// One window plus its panel body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShellWindow {
    #[serde(flatten)]
    pub window: WindowView,
    pub panel: Option<PanelView>,
}

/// Everything the view layer needs for one frame
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShellSnapshot {
    pub mode: SessionMode,
    pub login_error: Option<String>,
    pub notice: Option<String>,
    pub start_menu_open: bool,
    pub open_menu: Option<Menu>,
    /// Start menu entries, top to bottom
    pub menu_tools: Vec<&'static str>,
    pub desktop_icons: Vec<DesktopIcon>,
    /// Paint order, lowest rank first
    pub windows: Vec<ShellWindow>,
}

/// A running shell: engine state plus one panel host per open window
///
/// Every path that can change the window set goes through here so the host
/// map stays in step with the engine's window store.
pub struct Shell {
    engine: DesktopEngine,
    hosts: HashMap<WindowId, PanelHost>,
    rng: StdRng,
}

impl Shell {
    /// `seed` fixes ping delays and every feed's jitter
    pub fn new(config: ShellConfig, seed: u64) -> Self {
        Self {
            engine: DesktopEngine::with_config(config),
            hosts: HashMap::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn engine(&self) -> &DesktopEngine {
        &self.engine
    }

    pub fn panel(&self, id: WindowId) -> Option<&PanelHost> {
        self.hosts.get(&id)
    }

    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.resize(width, height);
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub fn login(&mut self, credential: &str) -> DesktopResult<()> {
        self.engine.login(credential)
    }

    pub fn shutdown(&mut self, now_ms: f64) -> DesktopResult<()> {
        self.engine.shutdown(now_ms)
    }

    /// Advance the session and every panel. Returns true when a shutdown
    /// completed on this tick.
    ///
    /// Panels are frozen while a shutdown is pending.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.engine.tick(now_ms) {
            info!(panels = self.hosts.len(), "dropping panels after shutdown");
            self.hosts.clear();
            return true;
        }
        if !self.engine.mode().is_desktop() {
            return false;
        }

        self.drop_orphans();
        for host in self.hosts.values_mut() {
            host.tick(now_ms);
        }
        false
    }

    // =========================================================================
    // Windows
    // =========================================================================

    pub fn open_tool(&mut self, name: &str, now_ms: f64) -> DesktopResult<WindowId> {
        let id = self.engine.open_tool(name)?;
        self.attach(id, now_ms);
        Ok(id)
    }

    pub fn select_menu_tool(&mut self, name: &str, now_ms: f64) -> DesktopResult<WindowId> {
        let id = self.engine.select_menu_tool(name)?;
        self.attach(id, now_ms);
        Ok(id)
    }

    pub fn open_desktop_icon(&mut self, name: &str, now_ms: f64) -> DesktopResult<WindowId> {
        let id = self.engine.open_desktop_icon(name)?;
        self.attach(id, now_ms);
        Ok(id)
    }

    pub fn close_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        let change = self.engine.close_window(id)?;
        self.drop_orphans();
        Ok(change)
    }

    pub fn focus_window(&mut self, id: WindowId) -> DesktopResult<Change> {
        self.engine.focus_window(id)
    }

    fn attach(&mut self, id: WindowId, now_ms: f64) {
        if let Some(window) = self.engine.windows.get(id) {
            let seed = self.rng.next_u64();
            self.hosts
                .insert(id, PanelHost::for_tool(window.tool, now_ms, seed));
        }
    }

    /// Drop hosts whose window is gone
    fn drop_orphans(&mut self) {
        let windows = &self.engine.windows;
        self.hosts.retain(|id, _| {
            let live = windows.get(*id).is_some();
            if !live {
                debug!(window_id = id, "panel dropped");
            }
            live
        });
    }

    // =========================================================================
    // Pointer and chrome
    // =========================================================================

    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let result = self.engine.handle_pointer_down(x, y);
        // the close button may have removed a window
        self.drop_orphans();
        result
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        self.engine.handle_pointer_move(x, y)
    }

    pub fn pointer_up(&mut self) -> InputResult {
        self.engine.handle_pointer_up()
    }

    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        self.engine.start_move_drag(id, x, y)
    }

    pub fn click_start_button(&mut self) {
        self.engine.click_start_button();
    }

    pub fn start_menu_shutdown(&mut self, now_ms: f64) -> DesktopResult<()> {
        self.engine.start_menu_shutdown(now_ms)
    }

    pub fn click_menu(&mut self, menu: Menu) {
        self.engine.click_menu(menu);
    }

    pub fn manage_menu_shutdown(&mut self, now_ms: f64) -> DesktopResult<()> {
        self.engine.manage_menu_shutdown(now_ms)
    }

    pub fn dismiss_notice(&mut self) {
        self.engine.dismiss_notice();
    }

    // =========================================================================
    // Panels
    // =========================================================================

    /// Enter a line in a Command Prompt window. `exit` closes the window.
    ///
    /// Stale ids and windows that are not prompts are absorbed.
    pub fn console_submit(
        &mut self,
        id: WindowId,
        line: &str,
        now: NaiveDateTime,
    ) -> DesktopResult<Change> {
        if !self.engine.mode().is_desktop() {
            return Ok(Change::Unchanged);
        }
        let Some(console) = self.hosts.get_mut(&id).and_then(PanelHost::console_mut) else {
            return Ok(Change::Unchanged);
        };

        match console.submit(line, now, &mut self.rng) {
            ConsoleAction::Continue => Ok(Change::Applied),
            ConsoleAction::Exit => self.close_window(id),
        }
    }

    /// Arrow-up in a Command Prompt window
    pub fn console_history_up(&mut self, id: WindowId) -> Option<String> {
        if !self.engine.mode().is_desktop() {
            return None;
        }
        self.hosts
            .get_mut(&id)
            .and_then(PanelHost::console_mut)
            .and_then(|console| console.history_up())
    }

    /// Arrow-down in a Command Prompt window
    pub fn console_history_down(&mut self, id: WindowId) -> Option<String> {
        if !self.engine.mode().is_desktop() {
            return None;
        }
        self.hosts
            .get_mut(&id)
            .and_then(PanelHost::console_mut)
            .and_then(|console| console.history_down())
    }

    /// Press a button inside a panel. Stale ids and presses outside the
    /// desktop are absorbed.
    pub fn panel_command(
        &mut self,
        id: WindowId,
        command: PanelCommand,
        now_ms: f64,
    ) -> ShellResult<Change> {
        if !self.engine.mode().is_desktop() {
            return Ok(Change::Unchanged);
        }
        let Some(host) = self.hosts.get_mut(&id) else {
            return Ok(Change::Unchanged);
        };
        match host.apply(&command, now_ms)? {
            Routed::Done => Ok(Change::Applied),
            Routed::Rejected => Err(ShellError::WrongPanel {
                id,
                command: command.name(),
            }),
        }
    }

    // =========================================================================
    // View
    // =========================================================================

    pub fn snapshot(&self) -> ShellSnapshot {
        let windows = self
            .engine
            .window_views()
            .into_iter()
            .map(|window| ShellWindow {
                panel: self.hosts.get(&window.id).map(PanelHost::view),
                window,
            })
            .collect();

        ShellSnapshot {
            mode: self.engine.mode(),
            login_error: self.engine.session.login_error().map(str::to_string),
            notice: self.engine.notice().map(str::to_string),
            start_menu_open: self.engine.chrome.is_start_menu_open(),
            open_menu: self.engine.chrome.open_menu(),
            menu_tools: MENU_TOOLS.to_vec(),
            desktop_icons: DESKTOP_ICONS.to_vec(),
            windows,
        }
    }

    pub fn snapshot_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    #[derive(Clone, Debug)]
    enum Op {
        Open(usize),
        Close(usize),
        ConsoleExit(usize),
        PointerClose(usize),
        Tick(f64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0..MENU_TOOLS.len()).prop_map(Op::Open),
            1 => (0usize..8).prop_map(Op::Close),
            1 => (0usize..8).prop_map(Op::ConsoleExit),
            1 => (0usize..8).prop_map(Op::PointerClose),
            1 => (0.0f64..5000.0).prop_map(Op::Tick),
        ]
    }

    fn live_ids(shell: &Shell) -> BTreeSet<WindowId> {
        shell.engine.windows.all_windows().map(|w| w.id).collect()
    }

    fn nth_live(shell: &Shell, idx: usize) -> Option<WindowId> {
        let ids: Vec<_> = live_ids(shell).into_iter().collect();
        (!ids.is_empty()).then(|| ids[idx % ids.len()])
    }

    proptest! {
        #[test]
        fn hosts_track_live_windows(ops in prop::collection::vec(op_strategy(), 1..40)) {
            let now = NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap();
            let mut shell = Shell::new(ShellConfig::default(), 3);
            shell.init(1280.0, 800.0);
            shell.login("0000").unwrap();

            for op in ops {
                match op {
                    Op::Open(idx) => {
                        let _ = shell.open_tool(MENU_TOOLS[idx], 0.0);
                    }
                    Op::Close(idx) => {
                        if let Some(id) = nth_live(&shell, idx) {
                            shell.close_window(id).unwrap();
                        }
                    }
                    Op::ConsoleExit(idx) => {
                        if let Some(id) = nth_live(&shell, idx) {
                            shell.console_submit(id, "exit", now).unwrap();
                        }
                    }
                    Op::PointerClose(idx) => {
                        if let Some(id) = nth_live(&shell, idx) {
                            let rect = shell.engine.windows.get(id).unwrap().rect();
                            // may land on a window stacked above
                            shell.pointer_down(rect.right() - 10.0, rect.y + 15.0);
                            shell.pointer_up();
                        }
                    }
                    Op::Tick(now_ms) => {
                        shell.tick(now_ms);
                    }
                }

                let hosted: BTreeSet<_> = shell.hosts.keys().copied().collect();
                prop_assert_eq!(hosted, live_ids(&shell));
            }
        }
    }
}
