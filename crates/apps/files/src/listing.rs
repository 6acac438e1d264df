//! Static home-directory listing with search and path breadcrumbs.

/// Directory the file manager opens in.
pub const HOME_PATH: &str = "/home/user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileEntry {
    pub name: &'static str,
    pub kind: EntryKind,
    pub size: Option<&'static str>,
    pub modified: &'static str,
}

impl FileEntry {
    const fn folder(name: &'static str, modified: &'static str) -> Self {
        Self {
            name,
            kind: EntryKind::Folder,
            size: None,
            modified,
        }
    }

    const fn file(name: &'static str, size: &'static str, modified: &'static str) -> Self {
        Self {
            name,
            kind: EntryKind::File,
            size: Some(size),
            modified,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self.kind {
            EntryKind::Folder => "[D]",
            EntryKind::File => "[F]",
        }
    }
}

const HOME_ENTRIES: [FileEntry; 9] = [
    FileEntry::folder("Documents", "2024-01-15"),
    FileEntry::folder("Downloads", "2024-01-14"),
    FileEntry::folder("Pictures", "2024-01-13"),
    FileEntry::folder("Videos", "2024-01-12"),
    FileEntry::folder("Music", "2024-01-11"),
    FileEntry::folder("Desktop", "2024-01-10"),
    FileEntry::file("config.txt", "2.3 KB", "2024-01-09"),
    FileEntry::file("system.log", "15.7 MB", "2024-01-08"),
    FileEntry::file("install.sh", "1.2 KB", "2024-01-07"),
];

pub fn home_entries() -> &'static [FileEntry] {
    &HOME_ENTRIES
}

/// Entries whose name contains `query`, ignoring case. An empty query keeps everything.
pub fn filter_entries(entries: &[FileEntry], query: &str) -> Vec<FileEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

/// Non-empty path segments, rendered as the breadcrumb trail.
pub fn breadcrumb(path: &str) -> Vec<&str> {
    path.split('/').filter(|segment| !segment.is_empty()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn class(self) -> &'static str {
        match self {
            Self::List => "files-list",
            Self::Grid => "files-grid",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn names(entries: &[FileEntry]) -> Vec<&'static str> {
        entries.iter().map(|entry| entry.name).collect()
    }

    #[test]
    fn search_is_case_insensitive() {
        assert_eq!(
            names(&filter_entries(home_entries(), "DO")),
            vec!["Documents", "Downloads"]
        );
        assert_eq!(
            names(&filter_entries(home_entries(), ".sh")),
            vec!["install.sh"]
        );
    }

    #[test]
    fn empty_query_keeps_listing_order() {
        assert_eq!(filter_entries(home_entries(), "  ").len(), home_entries().len());
        assert!(filter_entries(home_entries(), "nothing-here").is_empty());
    }

    #[test]
    fn breadcrumb_drops_empty_segments() {
        assert_eq!(breadcrumb(HOME_PATH), vec!["home", "user"]);
        assert_eq!(breadcrumb("//etc//systemd/"), vec!["etc", "systemd"]);
        assert!(breadcrumb("/").is_empty());
    }

    #[test]
    fn only_files_carry_sizes() {
        for entry in home_entries() {
            assert_eq!(entry.size.is_some(), entry.kind == EntryKind::File);
        }
    }
}
