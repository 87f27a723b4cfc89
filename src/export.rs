//! Writers for generated usernames.
//!
//! - `save_rule_txt` writes one username per line for a single rule.
//! - `save_all_rules_txt` writes `{company}-{stem}.txt` for each rule.
//! - `save_candidates_csv` writes every candidate with its source name and
//!   rule.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::Writer;

use crate::engine::Generator;
use crate::mutator::Rule;

pub fn rule_file_name(company: &str, rule: Rule) -> String {
    format!("{}-{}.txt", company, rule.file_stem())
}

fn write_lines(path: &Path, usernames: &[String]) -> Result<()> {
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);
    for username in usernames {
        writeln!(w, "{}", username)?;
    }
    w.flush()?;
    Ok(())
}

pub fn save_rule_txt<P: AsRef<Path>>(
    generator: &Generator,
    rule: Rule,
    suffix: &str,
    path: P,
) -> Result<()> {
    write_lines(path.as_ref(), &generator.candidates(rule, suffix))
}

/// Write one file per rule into `dir` and return the paths in rule order.
/// With `parallel`, each rule's candidates are generated on the rayon pool.
pub fn save_all_rules_txt<P: AsRef<Path>>(
    generator: &Generator,
    rules: &[Rule],
    company: &str,
    suffix: &str,
    dir: P,
    parallel: bool,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(rules.len());
    for &rule in rules {
        let path = dir.as_ref().join(rule_file_name(company, rule));
        let usernames = if parallel {
            generator.candidates_parallel(rule, suffix)
        } else {
            generator.candidates(rule, suffix)
        };
        write_lines(&path, &usernames)?;
        log::debug!("wrote {} usernames to {}", usernames.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

pub fn save_candidates_csv<P: AsRef<Path>>(
    generator: &Generator,
    rules: &[Rule],
    suffix: &str,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for rec in generator.records(rules, suffix) {
        wtr.serialize(rec)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn generator() -> Generator {
        let mut g = Generator::new();
        g.load_from_strings(&["John Smith\nMary Jane Watson\nCher"]);
        g
    }

    #[test]
    fn file_names_follow_rule_stems() {
        assert_eq!(rule_file_name("acme", Rule::FLast), "acme-flast.txt");
        assert_eq!(rule_file_name("acme", Rule::FDotLast), "acme-f.last.txt");
        assert_eq!(
            rule_file_name("acme", Rule::FirstDotLast),
            "acme-first.last.txt"
        );
    }

    #[test]
    fn writes_one_file_per_rule() {
        let g = generator();
        let dir = tempdir().unwrap();
        let paths = save_all_rules_txt(&g, &Rule::ALL, "acme", "@acme.com", dir.path(), false).unwrap();
        assert_eq!(paths.len(), 6);
        assert!(paths.iter().all(|p| p.exists()));

        let flast = std::fs::read_to_string(dir.path().join("acme-flast.txt")).unwrap();
        assert_eq!(flast, "JSmith@acme.com\nMJane@acme.com\nMWatson@acme.com\n");
        let first = std::fs::read_to_string(dir.path().join("acme-first.txt")).unwrap();
        assert_eq!(first, "John@acme.com\nMary@acme.com\n");
    }

    #[test]
    fn parallel_writes_identical_files() {
        let g = generator();
        let seq = tempdir().unwrap();
        let par = tempdir().unwrap();
        save_all_rules_txt(&g, &Rule::ALL, "acme", "", seq.path(), false).unwrap();
        save_all_rules_txt(&g, &Rule::ALL, "acme", "", par.path(), true).unwrap();
        for rule in Rule::ALL {
            let name = rule_file_name("acme", rule);
            assert_eq!(
                std::fs::read_to_string(seq.path().join(&name)).unwrap(),
                std::fs::read_to_string(par.path().join(&name)).unwrap()
            );
        }
    }

    #[test]
    fn writes_csv_with_header() {
        let g = generator();
        let dir = tempdir().unwrap();
        let path = dir.path().join("all.csv");
        save_candidates_csv(&g, &[Rule::LastF], "", &path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "Name,Rule,Username\nJohn Smith,last_f,SmithJ\nMary Jane Watson,last_f,JaneM\nMary Jane Watson,last_f,WatsonM\n"
        );
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let g = generator();
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing").join("out.txt");
        assert!(save_rule_txt(&g, Rule::First, "", &missing).is_err());
    }
}
