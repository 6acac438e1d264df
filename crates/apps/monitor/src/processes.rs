//! Synthetic process table: generation, search, sorting and kill.

use std::{cmp::Ordering, fmt, str::FromStr};

use desktop_app_contract::Entropy;

const FIRST_PID: u32 = 1000;

const PROCESS_NAMES: [&str; 24] = [
    "systemd",
    "kthreadd",
    "rcu_gp",
    "rcu_par_gp",
    "migration/0",
    "ksoftirqd/0",
    "rcu_preempt",
    "migration/1",
    "ksoftirqd/1",
    "chrome",
    "firefox",
    "code",
    "node",
    "npm",
    "bash",
    "zsh",
    "gnome-shell",
    "Xorg",
    "pulseaudio",
    "NetworkManager",
    "sshd",
    "dbus",
    "systemd-resolved",
    "systemd-timesyncd",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessStatus {
    Running,
    Sleeping,
    Stopped,
}

impl ProcessStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Sleeping => "sleeping",
            Self::Stopped => "stopped",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessRow {
    pub pid: u32,
    pub name: &'static str,
    /// CPU percent in `[0, 25)`.
    pub cpu: f64,
    /// Memory percent in `[0, 15)`.
    pub memory: f64,
    pub status: ProcessStatus,
    pub user: &'static str,
}

/// Regenerates the full table. Pids are stable across refreshes.
pub fn generate_processes(entropy: &mut impl Entropy) -> Vec<ProcessRow> {
    PROCESS_NAMES
        .into_iter()
        .zip(FIRST_PID..)
        .map(|(name, pid)| {
            let cpu = entropy.next_unit() * 25.0;
            let memory = entropy.next_unit() * 15.0;
            let status = if entropy.exceeds(0.2) {
                ProcessStatus::Running
            } else if entropy.exceeds(0.5) {
                ProcessStatus::Sleeping
            } else {
                ProcessStatus::Stopped
            };
            let user = if entropy.exceeds(0.3) { "user" } else { "root" };
            ProcessRow {
                pid,
                name,
                cpu,
                memory,
                status,
                user,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Name,
    #[default]
    Cpu,
    Memory,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [Self::Name, Self::Cpu, Self::Memory];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cpu => "cpu",
            Self::Memory => "memory",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|key| key.id() == raw).ok_or(())
    }
}

fn compare(key: SortKey, a: &ProcessRow, b: &ProcessRow) -> Ordering {
    match key {
        SortKey::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(b.name)),
        SortKey::Cpu => b.cpu.total_cmp(&a.cpu),
        SortKey::Memory => b.memory.total_cmp(&a.memory),
    }
}

/// Rows matching `query` by name (case-insensitive) or pid digits, ordered by `key`.
pub fn visible_processes(rows: &[ProcessRow], query: &str, key: SortKey) -> Vec<ProcessRow> {
    let query = query.trim();
    let needle = query.to_lowercase();
    let mut visible: Vec<ProcessRow> = rows
        .iter()
        .filter(|row| {
            row.name.to_lowercase().contains(&needle) || row.pid.to_string().contains(query)
        })
        .copied()
        .collect();
    visible.sort_by(|a, b| compare(key, a, b));
    visible
}

/// Removes `pid` from the table until the next refresh. Returns `true` if a row was removed.
pub fn kill_process(rows: &mut Vec<ProcessRow>, pid: u32) -> bool {
    let before = rows.len();
    rows.retain(|row| row.pid != pid);
    rows.len() != before
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub running: usize,
    pub sleeping: usize,
    pub stopped: usize,
}

pub fn status_counts(rows: &[ProcessRow]) -> StatusCounts {
    rows.iter().fold(
        StatusCounts {
            total: rows.len(),
            ..StatusCounts::default()
        },
        |mut counts, row| {
            match row.status {
                ProcessStatus::Running => counts.running += 1,
                ProcessStatus::Sleeping => counts.sleeping += 1,
                ProcessStatus::Stopped => counts.stopped += 1,
            }
            counts
        },
    )
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ScriptedEntropy;
    use pretty_assertions::assert_eq;

    use super::*;

    fn row(pid: u32, name: &'static str, cpu: f64, memory: f64) -> ProcessRow {
        ProcessRow {
            pid,
            name,
            cpu,
            memory,
            status: ProcessStatus::Running,
            user: "user",
        }
    }

    fn pids(rows: &[ProcessRow]) -> Vec<u32> {
        rows.iter().map(|row| row.pid).collect()
    }

    #[test]
    fn generates_twenty_four_sequential_pids() {
        let rows = generate_processes(&mut ScriptedEntropy::new([0.9]));
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].pid, 1000);
        assert_eq!(rows[23].pid, 1023);
        assert_eq!(rows[23].name, "systemd-timesyncd");
        assert!(rows
            .iter()
            .all(|row| row.status == ProcessStatus::Running && row.user == "user"));
    }

    #[test]
    fn low_draws_produce_stopped_root_processes() {
        let rows = generate_processes(&mut ScriptedEntropy::new([0.1]));
        assert!(rows
            .iter()
            .all(|row| row.status == ProcessStatus::Stopped && row.user == "root"));
        assert!(rows.iter().all(|row| row.cpu < 25.0 && row.memory < 15.0));
    }

    #[test]
    fn status_falls_through_to_sleeping() {
        // cpu, memory, running check, sleeping check, user
        let mut entropy = ScriptedEntropy::new([0.5, 0.5, 0.1, 0.9, 0.9]);
        let rows = generate_processes(&mut entropy);
        assert_eq!(rows[0].status, ProcessStatus::Sleeping);
    }

    #[test]
    fn search_matches_name_or_pid() {
        let rows = vec![
            row(1000, "systemd", 1.0, 1.0),
            row(1009, "chrome", 2.0, 2.0),
            row(1020, "sshd", 3.0, 3.0),
        ];

        assert_eq!(pids(&visible_processes(&rows, "SSH", SortKey::Cpu)), vec![1020]);
        assert_eq!(
            pids(&visible_processes(&rows, "100", SortKey::Name)),
            vec![1009, 1000]
        );
        assert_eq!(visible_processes(&rows, "", SortKey::Cpu).len(), 3);
    }

    #[test]
    fn sorts_by_each_key() {
        let rows = vec![
            row(1, "zsh", 5.0, 1.0),
            row(2, "Xorg", 1.0, 9.0),
            row(3, "bash", 9.0, 4.0),
        ];

        assert_eq!(pids(&visible_processes(&rows, "", SortKey::Name)), vec![3, 2, 1]);
        assert_eq!(pids(&visible_processes(&rows, "", SortKey::Cpu)), vec![3, 1, 2]);
        assert_eq!(pids(&visible_processes(&rows, "", SortKey::Memory)), vec![2, 3, 1]);
    }

    #[test]
    fn kill_removes_one_row() {
        let mut rows = vec![row(1000, "node", 1.0, 1.0), row(1001, "npm", 1.0, 1.0)];
        assert!(kill_process(&mut rows, 1000));
        assert!(!kill_process(&mut rows, 1000));
        assert_eq!(pids(&rows), vec![1001]);
    }

    #[test]
    fn counts_by_status() {
        let mut rows = vec![
            row(1, "a", 0.0, 0.0),
            row(2, "b", 0.0, 0.0),
            row(3, "c", 0.0, 0.0),
        ];
        rows[1].status = ProcessStatus::Sleeping;
        rows[2].status = ProcessStatus::Stopped;

        assert_eq!(
            status_counts(&rows),
            StatusCounts {
                total: 3,
                running: 1,
                sleeping: 1,
                stopped: 1,
            }
        );
    }

    #[test]
    fn sort_key_round_trips_through_ids() {
        for key in SortKey::ALL {
            assert_eq!(key.id().parse::<SortKey>(), Ok(key));
        }
        assert_eq!("pid".parse::<SortKey>(), Err(()));
    }
}
