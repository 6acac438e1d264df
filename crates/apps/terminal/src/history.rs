//! Submitted-command history with ArrowUp/ArrowDown recall.

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the input field should show after a history step.
pub enum Recall {
    /// Replace the input with a previous command.
    Line(String),
    /// Stepped past the newest entry; clear the input.
    Blank,
    /// Nothing to recall; leave the input alone.
    Stay,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Commands in submission order plus the recall cursor.
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Records a submitted command and resets the cursor.
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push(command.into());
        self.cursor = None;
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been submitted yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// ArrowUp: newest entry first, then older ones, stopping at the oldest.
    pub fn older(&mut self) -> Recall {
        if self.entries.is_empty() {
            return Recall::Stay;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(index) => index.saturating_sub(1),
        };
        self.cursor = Some(index);
        Recall::Line(self.entries[index].clone())
    }

    /// ArrowDown: walks back toward the newest entry, then clears the input.
    pub fn newer(&mut self) -> Recall {
        let Some(index) = self.cursor else {
            return Recall::Stay;
        };
        let next = index + 1;
        if next >= self.entries.len() {
            self.cursor = None;
            return Recall::Blank;
        }
        self.cursor = Some(next);
        Recall::Line(self.entries[next].clone())
    }
}
