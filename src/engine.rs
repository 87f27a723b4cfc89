//! Generator: loads raw names, splits them, and expands the split names into
//! per-rule username candidates.
//!
//! Typical usage:
//!
//! ```no_run
//! use namelistgen::{engine::Generator, mutator::Rule};
//! # fn main() -> anyhow::Result<()> {
//! let mut generator = Generator::new();
//! generator.load_from_file_paths(&["/path/to/names.txt"])?;
//! for username in generator.candidates(Rule::FDotLast, "@example.com") {
//!     println!("{}", username);
//! }
//! # Ok(())
//! # }
//! ```
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use serde::Serialize;

use crate::io::{DEFAULT_MMAP_THRESHOLD_BYTES, iter_lines_auto};
use crate::mutator::Rule;
use crate::name::{SplitName, split_name};

/// One generated username, as written to the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Rule")]
    pub rule: &'static str,
    #[serde(rename = "Username")]
    pub username: String,
}

/// Holds the split names of every accepted input line, in input order.
#[derive(Debug, Default)]
pub struct Generator {
    pub names: Vec<SplitName>,
    /// Non-blank lines that could not be split into a first and last name.
    pub skipped: usize,
}

/// Turn a `-n/--domain` value into the suffix appended to each username.
pub fn domain_suffix(domain: &str) -> String {
    let domain = domain.trim().trim_start_matches('@');
    if domain.is_empty() {
        String::new()
    } else {
        format!("@{}", domain)
    }
}

impl Generator {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            skipped: 0,
        }
    }

    fn push_line(&mut self, line: &str) {
        let raw = line.trim();
        if raw.is_empty() {
            return;
        }
        match split_name(raw) {
            Some(name) => self.names.push(name),
            None => self.skipped += 1,
        }
    }

    /// Load names already in memory, one per line. Intended for tests and
    /// programmatic use.
    pub fn load_from_strings(&mut self, contents: &[&str]) {
        for c in contents {
            for line in c.lines() {
                self.push_line(line);
            }
        }
    }

    /// Stream names from files, memory-mapping those at or above
    /// `mmap_threshold_bytes`.
    pub fn load_from_file_paths_with_threshold<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        mmap_threshold_bytes: u64,
    ) -> Result<()> {
        for p in paths {
            let before = self.names.len();
            let iter = iter_lines_auto(p, mmap_threshold_bytes)?;
            for line in iter {
                self.push_line(&line?);
            }
            log::info!(
                "loaded {} names from {}",
                self.names.len() - before,
                p.as_ref().display()
            );
        }
        Ok(())
    }

    /// Convenience wrapper that uses the default mmap threshold.
    pub fn load_from_file_paths<P: AsRef<Path>>(&mut self, paths: &[P]) -> Result<()> {
        self.load_from_file_paths_with_threshold(paths, DEFAULT_MMAP_THRESHOLD_BYTES)
    }

    /// Candidates for one rule: names in input order, each name's set in set
    /// order, `suffix` appended verbatim.
    pub fn candidates(&self, rule: Rule, suffix: &str) -> Vec<String> {
        self.names
            .iter()
            .flat_map(|n| rule.apply(n))
            .map(|u| u + suffix)
            .collect()
    }

    /// Same output as [`Generator::candidates`], computed on the rayon pool.
    pub fn candidates_parallel(&self, rule: Rule, suffix: &str) -> Vec<String> {
        self.names
            .par_iter()
            .flat_map_iter(|n| rule.apply(n))
            .map(|u| u + suffix)
            .collect()
    }

    pub fn records(&self, rules: &[Rule], suffix: &str) -> Vec<CandidateRecord> {
        let mut out = Vec::new();
        for n in &self.names {
            let display = if n.has_second() {
                format!("{} {} {}", n.first, n.second, n.last)
            } else {
                format!("{} {}", n.first, n.last)
            };
            for rule in rules {
                for username in rule.apply(n) {
                    out.push(CandidateRecord {
                        name: display.clone(),
                        rule: rule.id(),
                        username: username + suffix,
                    });
                }
            }
        }
        out
    }
}
