//! Verb table
//!
//! The first space-separated token selects the verb (case-insensitive); the
//! remaining tokens are its arguments. Verbs never touch the window manager.
//! `exit` is reported back as [`CommandOutput::Exit`] for the host to act on.

use chrono::NaiveDateTime;
use rand::{Rng, RngCore};

/// Prompt printed before every echoed command line
pub const PROMPT: &str = "P:\\>";

/// Version string shared by `ver` and the console banner
pub const VERSION_LINE: &str = "Paskanet II [Version 2.1.0]";

const PING_BYTES: u32 = 32;
const PING_TTL: u32 = 58;
const PING_COUNT: usize = 4;
const PING_MIN_MS: u32 = 20;
const PING_MAX_MS: u32 = 150;

const HELP: [&str; 19] = [
    "For more information on a specific command, type HELP command-name",
    "CLS              Clears the screen.",
    "CMD              Starts a new instance of the Paskanet II command interpreter.",
    "COLOR            Sets the default console foreground and background colors.",
    "DATE             Displays or sets the date.",
    "DIR              Displays a list of files and subdirectories in a directory.",
    "ECHO             Displays messages, or turns command echoing on or off.",
    "EXIT             Quits the CMD.EXE program (command interpreter).",
    "HOSTNAME         Prints the name of the current host.",
    "IPCONFIG         Displays all current TCP/IP network configuration values.",
    "NETSTAT          Displays protocol statistics and current TCP/IP network connections.",
    "PING             Verifies connectivity to a remote computer.",
    "SHUTDOWN         Allows proper local or remote shutdown of the machine.",
    "SYSINFO          Displays machine specific properties and configuration.",
    "TASKLIST         Displays all currently running tasks including services.",
    "TIME             Displays or sets the system time.",
    "TYPE             Displays the contents of a text file or files.",
    "VER              Displays the Paskanet II version.",
    "WHOAMI           Displays the current user name.",
];

const DIR: [&str; 9] = [
    " Volume in drive P is PaskanetOS",
    " Directory of P:\\",
    "",
    "07/04/2024  02:10 PM    <DIR>          Users",
    "07/04/2024  01:05 PM    <DIR>          Windows",
    "07/04/2024  03:15 PM    <DIR>          Program Files",
    "07/05/2024  09:00 AM             1,024 config.sys",
    "               1 File(s)          1,024 bytes",
    "               3 Dir(s)   17,179,869,184 bytes free",
];

const TASKLIST: [&str; 7] = [
    "Image Name                     PID Session Name        Session#    Mem Usage",
    "========================= ======== ================ =========== ============",
    "System                           4 Services                   0      128 MB",
    "svchost.exe                   1120 Services                   0       64 MB",
    "explorer.exe                  4132 Console                    1      256 MB",
    "P2Manager.exe                 6012 Services                   0      180 MB",
    "cmd.exe                       7123 Console                    1       24 MB",
];

const SYSINFO: [&str; 6] = [
    "Host Name:                 PASKANET-SVR-01",
    "OS Name:                   Paskanet II Server",
    "OS Version:                2.1.0 Build 2100",
    "Processor(s):              1 Processor(s) Installed.",
    "Total Physical Memory:     32,768 MB",
    "Available Physical Memory: 14,336 MB",
];

const SHUTDOWN: [&str; 2] = [
    "Broadcasting shutdown message...",
    "Use the Start Menu or Manage menu to shut down.",
];

/// Inputs a verb may read besides its arguments
pub struct CommandContext<'a> {
    /// Local wall-clock time for `date` and `time`
    pub now: NaiveDateTime,
    /// Source for simulated ping latencies
    pub rng: &'a mut dyn RngCore,
}

/// What a command line produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    /// Body lines to print under the echoed prompt
    Lines(Vec<String>),
    /// Wipe the transcript
    ClearScreen,
    /// Close the prompt window
    Exit,
}

fn lines(src: &[&str]) -> CommandOutput {
    CommandOutput::Lines(src.iter().map(|s| s.to_string()).collect())
}

/// Run one command line
pub fn execute(line: &str, ctx: &mut CommandContext<'_>) -> CommandOutput {
    let mut tokens = line.trim().split(' ');
    let command = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match command.to_lowercase().as_str() {
        "help" => lines(&HELP),
        "cls" => CommandOutput::ClearScreen,
        "echo" => CommandOutput::Lines(vec![args.join(" ")]),
        "ver" => lines(&[VERSION_LINE]),
        "date" => CommandOutput::Lines(vec![format!(
            "The current date is: {}",
            ctx.now.format("%-m/%-d/%Y")
        )]),
        "time" => CommandOutput::Lines(vec![format!(
            "The current time is: {}",
            ctx.now.format("%-I:%M:%S %p")
        )]),
        "dir" => lines(&DIR),
        "ping" => ping(args.first().copied(), ctx),
        "tasklist" => lines(&TASKLIST),
        "sysinfo" => lines(&SYSINFO),
        "exit" => CommandOutput::Exit,
        "shutdown" => lines(&SHUTDOWN),
        "" => CommandOutput::Lines(Vec::new()),
        _ => CommandOutput::Lines(vec![
            format!("'{}' is not recognized as an internal or external command,", command),
            "operable program or batch file.".to_string(),
        ]),
    }
}

fn ping(host: Option<&str>, ctx: &mut CommandContext<'_>) -> CommandOutput {
    let Some(host) = host else {
        return lines(&["Usage: ping <hostname>"]);
    };

    let mut out = Vec::with_capacity(PING_COUNT + 1);
    out.push(format!("Pinging {} with {} bytes of data:", host, PING_BYTES));
    for _ in 0..PING_COUNT {
        let delay = ctx.rng.gen_range(PING_MIN_MS..=PING_MAX_MS);
        out.push(format!(
            "Reply from {}: bytes={} time={}ms TTL={}",
            host, PING_BYTES, delay, PING_TTL
        ));
    }
    CommandOutput::Lines(out)
}
