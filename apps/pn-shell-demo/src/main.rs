//! Drive a shell from a line script on stdin.
//!
//! ```text
//! pn-shell-demo [config.json] < script.txt
//! ```
//!
//! Script lines:
//!
//! ```text
//! login <password>
//! open <tool name>
//! close <id>
//! focus <id>
//! drag <id> <x0> <y0> <x1> <y1>
//! type <id> <line>
//! panel <id> <command> [arg]
//! shutdown
//! tick <ms>
//! dump
//! ```
//!
//! Time is virtual: it only moves on `tick`. Blank lines and lines starting
//! with `#` are skipped.

use std::io::{self, BufRead};

use anyhow::{bail, Context};
use pn_desktop::ShellConfig;
use pn_panels::ServiceAction;
use pn_shell::{PanelCommand, Shell};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const SCREEN_WIDTH: f32 = 1280.0;
const SCREEN_HEIGHT: f32 = 800.0;
const SEED: u64 = 0x5eed;

struct Driver {
    shell: Shell,
    now_ms: f64,
}

impl Driver {
    fn run_line(&mut self, line: &str) -> anyhow::Result<()> {
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match verb {
            "login" => self.shell.login(rest)?,
            "open" => {
                let id = self.shell.open_tool(rest, self.now_ms)?;
                info!(window_id = id, tool = rest, "opened");
            }
            "close" => {
                let change = self.shell.close_window(parse_id(rest)?)?;
                info!(?change, "close");
            }
            "focus" => {
                let change = self.shell.focus_window(parse_id(rest)?)?;
                info!(?change, "focus");
            }
            "drag" => {
                let args: Vec<&str> = rest.split_whitespace().collect();
                let [id, x0, y0, x1, y1] = args[..] else {
                    bail!("usage: drag <id> <x0> <y0> <x1> <y1>");
                };
                let id = parse_id(id)?;
                let started = self.shell.start_move_drag(id, parse_f32(x0)?, parse_f32(y0)?);
                self.shell.pointer_move(parse_f32(x1)?, parse_f32(y1)?);
                self.shell.pointer_up();
                info!(window_id = id, ?started, "drag");
            }
            "type" => {
                let (id, text) = rest.split_once(' ').unwrap_or((rest, ""));
                let now = chrono::Local::now().naive_local();
                let change = self.shell.console_submit(parse_id(id)?, text, now)?;
                info!(?change, "typed");
            }
            "panel" => {
                let mut parts = rest.splitn(3, ' ');
                let id = parse_id(parts.next().unwrap_or(""))?;
                let command = parse_panel_command(parts.next().unwrap_or(""), parts.next())?;
                let change = self.shell.panel_command(id, command, self.now_ms)?;
                info!(?change, "panel");
            }
            "shutdown" => self.shell.shutdown(self.now_ms)?,
            "tick" => {
                let elapsed: f64 = rest
                    .parse()
                    .with_context(|| format!("invalid duration: {:?}", rest))?;
                self.now_ms += elapsed;
                if self.shell.tick(self.now_ms) {
                    info!(now_ms = self.now_ms, "shutdown complete");
                }
            }
            "dump" => println!("{}", self.shell.snapshot_json()?),
            other => bail!("unknown script command: {}", other),
        }
        Ok(())
    }
}

fn parse_id(text: &str) -> anyhow::Result<u64> {
    text.trim()
        .parse()
        .with_context(|| format!("invalid window id: {:?}", text))
}

fn parse_f32(text: &str) -> anyhow::Result<f32> {
    text.trim()
        .parse()
        .with_context(|| format!("invalid number: {:?}", text))
}

fn parse_panel_command(name: &str, arg: Option<&str>) -> anyhow::Result<PanelCommand> {
    let arg = arg.unwrap_or("").to_string();
    Ok(match name {
        "select-server" => PanelCommand::SelectServer(arg),
        "select-service" => PanelCommand::SelectService(arg),
        "start" => PanelCommand::Service(ServiceAction::Start),
        "stop" => PanelCommand::Service(ServiceAction::Stop),
        "restart" => PanelCommand::Service(ServiceAction::Restart),
        "scan" => PanelCommand::ScanDisk,
        "clean" => PanelCommand::CleanDisk,
        "optimize" => PanelCommand::OptimizeDrives,
        other => bail!("unknown panel command: {}", other),
    })
}

fn load_config() -> anyhow::Result<ShellConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            Ok(ShellConfig::from_json(&json)?)
        }
        None => Ok(ShellConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut shell = Shell::new(load_config()?, SEED);
    shell.init(SCREEN_WIDTH, SCREEN_HEIGHT);
    let mut driver = Driver { shell, now_ms: 0.0 };

    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // a failed command is reported and the script carries on
        if let Err(err) = driver.run_line(line) {
            warn!(line = number + 1, "{:#}", err);
        }
    }
    Ok(())
}
