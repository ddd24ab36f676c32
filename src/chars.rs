use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Rejected lines shown in the warning; the rest are only counted.
const MAX_REPORTED: usize = 10;

#[derive(Debug, Error)]
pub enum CharsError {
    #[error("chars file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read chars file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Characters to index, in first-seen order, with O(1) membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetChars {
    order: Vec<char>,
    members: HashSet<char>,
}

impl TargetChars {
    /// Load one character per line. Blank lines are skipped; lines holding
    /// more than one character are dropped with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CharsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CharsError::NotFound(path.to_path_buf()));
        }
        let text = fs::read_to_string(path).map_err(|source| CharsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (targets, rejected) = Self::parse_lines(&text);
        if !rejected.is_empty() {
            warn!(
                "{} line(s) in {} are not single characters and will be ignored: {:?}",
                rejected.len(),
                path.display(),
                &rejected[..rejected.len().min(MAX_REPORTED)]
            );
        }
        Ok(targets)
    }

    /// Parse chars-file text, returning the accepted set and the rejected lines.
    pub fn parse_lines(text: &str) -> (Self, Vec<String>) {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut targets = Self::default();
        let mut rejected = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut chars = line.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => targets.push(c),
                _ => rejected.push(line.to_string()),
            }
        }
        (targets, rejected)
    }

    fn push(&mut self, c: char) {
        if self.members.insert(c) {
            self.order.push(c);
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    /// Characters in the order they were first listed.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl FromIterator<char> for TargetChars {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut targets = Self::default();
        for c in iter {
            targets.push(c);
        }
        targets
    }
}
