//! Terminal summary of a generation run.
use colored::*;

use crate::{engine::Generator, mutator::Rule};

fn visible_len(s: &str) -> usize {
    // Skip ANSI color sequences (\x1b[ ... m)
    let mut len = 0;
    let mut iter = s.chars().peekable();
    while let Some(ch) = iter.next() {
        if ch == '\u{1b}' {
            if let Some('[') = iter.peek().cloned() {
                let _ = iter.next();
            }
            for c in iter.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

fn section_header(title: &str) -> String {
    let underline = "─".repeat(visible_len(title));
    format!("\n{}\n{}\n\n", title, underline)
}

pub fn render_summary(generator: &Generator, rules: &[Rule], suffix: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        "namelistgen: Username Candidates".bold().cyan()
    ));

    out.push_str(&section_header(&"Input".bold().yellow().to_string()));
    out.push_str(&format!("Names parsed: {}\n", generator.names.len()));
    out.push_str(&format!("Names skipped: {}\n", generator.skipped));
    let shown_suffix = if suffix.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        suffix.to_string()
    };
    out.push_str(&format!("Domain suffix: {}\n", shown_suffix));

    out.push_str(&section_header(
        &"Candidates per Rule".bold().cyan().to_string(),
    ));
    let mut total = 0;
    for &rule in rules {
        let candidates = generator.candidates(rule, suffix);
        total += candidates.len();
        match candidates.first() {
            Some(sample) => out.push_str(&format!(
                "  {}: {} (e.g. {})\n",
                rule.id().bold(),
                candidates.len(),
                sample.green()
            )),
            None => out.push_str(&format!(
                "  {}: 0 {}\n",
                rule.id().bold(),
                "(no candidates)".dimmed()
            )),
        }
    }
    out.push_str(&format!("  Total: {}\n", total));

    out
}
