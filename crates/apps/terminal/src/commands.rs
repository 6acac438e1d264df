//! Simulated command interpreter. Every command is answered from canned data.

use desktop_app_contract::ClockSnapshot;

/// Prompt rendered before every command line.
pub const PROMPT: &str = "[user@arch ~]$ ";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered transcript line.
pub enum TerminalLine {
    /// Echo of a submitted command, prompt included.
    Command(String),
    /// Regular command output.
    Output(String),
    /// Command errors and usage failures.
    Error(String),
}

impl TerminalLine {
    /// Text shown for the line.
    pub fn text(&self) -> &str {
        match self {
            Self::Command(text) | Self::Output(text) | Self::Error(text) => text,
        }
    }

    /// CSS class used to color the line.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Command(_) => "terminal-line terminal-line-command",
            Self::Output(_) => "terminal-line",
            Self::Error(_) => "terminal-line terminal-line-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Effect of running one input line.
pub enum CommandOutcome {
    /// Blank input; nothing is recorded.
    Ignored,
    /// Wipe the transcript.
    Clear,
    /// Close the hosting window.
    Exit,
    /// Lines to append to the transcript.
    Append(Vec<TerminalLine>),
}

/// Transcript shown when a terminal opens.
pub fn welcome_lines() -> Vec<TerminalLine> {
    vec![
        TerminalLine::Output("Arch Linux Terminal Emulator v1.0".to_string()),
        TerminalLine::Output("Type \"help\" for available commands".to_string()),
    ]
}

const HELP: &str = "Available commands:
  help          - Show this help message
  ls            - List directory contents
  pwd           - Print working directory
  whoami        - Display current user
  date          - Show current date and time
  uname         - System information
  ps            - Show running processes
  free          - Display memory usage
  df            - Show disk usage
  clear         - Clear terminal
  exit          - Close this terminal
  echo          - Display text
  ping          - Ping a host
  systemctl     - Control systemd services
  pacman        - Package manager commands";

const LS: &str = "total 32
drwxr-xr-x 2 user user 4096 Jan 15 10:30 Documents
drwxr-xr-x 2 user user 4096 Jan 14 09:15 Downloads
drwxr-xr-x 2 user user 4096 Jan 13 14:22 Pictures
drwxr-xr-x 2 user user 4096 Jan 12 16:45 Videos
drwxr-xr-x 2 user user 4096 Jan 11 11:30 Music
-rw-r--r-- 1 user user  2048 Jan 10 08:15 config.txt
-rw-r--r-- 1 user user 15728 Jan 09 12:00 system.log";

const PS: &str = "  PID TTY          TIME CMD
 1234 pts/0    00:00:01 bash
 1235 pts/0    00:00:00 node
 1236 pts/0    00:00:00 terminal-ui
 1237 pts/0    00:00:00 ps";

const FREE: &str = "              total        used        free      shared  buff/cache   available
Mem:        8165324     2341256     4123068      125476     1701000     5456789
Swap:       2097148           0     2097148";

const DF: &str = "Filesystem     1K-blocks    Used Available Use% Mounted on
/dev/sda1       20511312 8234156  11231840  43% /
/dev/sda2         524252   45123    454378  10% /boot
tmpfs            4082662       0   4082662   0% /dev/shm";

const PACKAGES: &str = "base 3-1
bash 5.2.015-1
coreutils 9.4-2
filesystem 2023.09.18-1
glibc 2.38-7
linux 6.6.8.arch1-1
pacman 6.0.2-7
systemd 254.5-1";

/// Runs one input line against the canned command set.
pub fn run_command(line: &str, now: ClockSnapshot) -> CommandOutcome {
    let command = line.trim();
    if command.is_empty() {
        return CommandOutcome::Ignored;
    }

    let args: Vec<&str> = command.split_whitespace().collect();
    let result = match args.as_slice() {
        ["clear", ..] => return CommandOutcome::Clear,
        ["exit" | "logout", ..] => return CommandOutcome::Exit,
        ["help", ..] => Ok(HELP.to_string()),
        ["ls", ..] => Ok(LS.to_string()),
        ["pwd", ..] => Ok("/home/user".to_string()),
        ["whoami", ..] => Ok("user".to_string()),
        ["date", ..] => Ok(format!("{} {}", now.date_label(), now.time_label())),
        ["uname", "-a", ..] => {
            Ok("Linux arch 6.6.8-arch1-1 #1 SMP PREEMPT_DYNAMIC x86_64 GNU/Linux".to_string())
        }
        ["uname", ..] => Ok("Linux".to_string()),
        ["ps", ..] => Ok(PS.to_string()),
        ["free", ..] => Ok(FREE.to_string()),
        ["df", ..] => Ok(DF.to_string()),
        ["echo", rest @ ..] => Ok(rest.join(" ")),
        ["ping", host, ..] => Ok(ping(host)),
        ["ping"] => Err("ping: usage error: Destination address required".to_string()),
        ["systemctl", "status", service, ..] => Ok(service_status(service)),
        ["systemctl", ..] => Err("systemctl: command requires additional arguments".to_string()),
        ["pacman", "-Q", ..] => Ok(PACKAGES.to_string()),
        ["pacman", ..] => Err("pacman: invalid operation".to_string()),
        _ => Err(format!("bash: {command}: command not found")),
    };

    let mut lines = vec![TerminalLine::Command(format!("{PROMPT}{command}"))];
    match result {
        Ok(output) if output.is_empty() => {}
        Ok(output) => lines.push(TerminalLine::Output(output)),
        Err(error) => lines.push(TerminalLine::Error(error)),
    }
    CommandOutcome::Append(lines)
}

fn ping(host: &str) -> String {
    format!(
        "PING {host} (1.2.3.4) 56(84) bytes of data.
64 bytes from {host} (1.2.3.4): icmp_seq=1 ttl=64 time=0.123 ms
64 bytes from {host} (1.2.3.4): icmp_seq=2 ttl=64 time=0.156 ms
--- {host} ping statistics ---
2 packets transmitted, 2 received, 0% packet loss"
    )
}

fn service_status(service: &str) -> String {
    format!(
        "● {service}.service - {service} service
   Loaded: loaded (/usr/lib/systemd/system/{service}.service; enabled; vendor preset: disabled)
   Active: active (running) since Mon 2024-01-15 10:30:45 UTC; 2h 15min ago
 Main PID: 1234 ({service})
    Tasks: 3 (limit: 4915)
   Memory: 24.2M
   CGroup: /system.slice/{service}.service
           └─1234 /usr/bin/{service}"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn run(line: &str) -> CommandOutcome {
        run_command(line, ClockSnapshot::at_unix_ms(0))
    }

    fn appended(line: &str) -> Vec<TerminalLine> {
        match run(line) {
            CommandOutcome::Append(lines) => lines,
            other => panic!("expected appended lines, got {other:?}"),
        }
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(run("   "), CommandOutcome::Ignored);
    }

    #[test]
    fn clear_wipes_transcript() {
        assert_eq!(run("clear"), CommandOutcome::Clear);
    }

    #[test]
    fn exit_and_logout_close_the_window() {
        assert_eq!(run(" exit "), CommandOutcome::Exit);
        assert_eq!(run("logout now"), CommandOutcome::Exit);
        assert!(matches!(&appended("exits")[1], TerminalLine::Error(_)));
    }

    #[test]
    fn unknown_command_reports_not_found() {
        assert_eq!(
            appended("  frobnicate --now "),
            vec![
                TerminalLine::Command("[user@arch ~]$ frobnicate --now".to_string()),
                TerminalLine::Error("bash: frobnicate --now: command not found".to_string()),
            ]
        );
    }

    #[test]
    fn uname_switches_on_all_flag() {
        assert_eq!(appended("uname")[1], TerminalLine::Output("Linux".to_string()));
        assert!(appended("uname -a")[1].text().contains("6.6.8-arch1-1"));
    }

    #[test]
    fn echo_joins_arguments() {
        assert_eq!(
            appended("echo hello   world")[1],
            TerminalLine::Output("hello world".to_string())
        );
        assert_eq!(appended("echo").len(), 1);
    }

    #[test]
    fn argument_commands_report_usage_errors() {
        assert!(matches!(&appended("ping")[1], TerminalLine::Error(text) if text.contains("Destination")));
        assert!(matches!(&appended("systemctl")[1], TerminalLine::Error(_)));
        assert!(matches!(&appended("pacman -S vim")[1], TerminalLine::Error(text) if text == "pacman: invalid operation"));
    }

    #[test]
    fn service_status_names_the_unit() {
        let lines = appended("systemctl status sshd");
        assert!(lines[1].text().starts_with("● sshd.service - sshd service"));
        assert!(lines[1].text().contains("/usr/bin/sshd"));
    }

    #[test]
    fn date_uses_supplied_clock() {
        assert_eq!(
            appended("date")[1],
            TerminalLine::Output("1970-01-01 00:00:00".to_string())
        );
    }
}
