//! Username conventions applied to a [`SplitName`].
//!
//! Every rule yields a candidate built from `(first, last)`. When the name has
//! a `second` part, rules that use a surname also yield the same pattern built
//! from `(first, second)`, so three-part names get two candidates per rule.
//! [`Rule::First`] ignores the surname and never has a second variant.
use std::collections::BTreeSet;
use std::fmt;

use clap::ValueEnum;

use crate::name::SplitName;

/// The fixed set of supported naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum Rule {
    /// jsmith
    #[value(name = "f_last")]
    FLast,
    /// j.smith
    #[value(name = "f_dot_last")]
    FDotLast,
    /// smithj
    #[value(name = "last_f")]
    LastF,
    /// john.smith
    #[value(name = "first_dot_last")]
    FirstDotLast,
    /// johns
    #[value(name = "first_l")]
    FirstL,
    /// john
    #[value(name = "first")]
    First,
}

impl Rule {
    pub const ALL: [Rule; 6] = [
        Rule::FLast,
        Rule::FDotLast,
        Rule::FirstL,
        Rule::FirstDotLast,
        Rule::First,
        Rule::LastF,
    ];

    /// Identifier used on the command line and in CSV output.
    pub fn id(self) -> &'static str {
        match self {
            Rule::FLast => "f_last",
            Rule::FDotLast => "f_dot_last",
            Rule::LastF => "last_f",
            Rule::FirstDotLast => "first_dot_last",
            Rule::FirstL => "first_l",
            Rule::First => "first",
        }
    }

    /// Stem of the per-rule output file, e.g. `acme-f.last.txt`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Rule::FLast => "flast",
            Rule::FDotLast => "f.last",
            Rule::LastF => "lastf",
            Rule::FirstDotLast => "first.last",
            Rule::FirstL => "firstl",
            Rule::First => "first",
        }
    }

    pub fn apply(self, name: &SplitName) -> BTreeSet<String> {
        match self {
            Rule::FLast => f_last(name),
            Rule::FDotLast => f_dot_last(name),
            Rule::LastF => last_f(name),
            Rule::FirstDotLast => first_dot_last(name),
            Rule::FirstL => first_l(name),
            Rule::First => first(name),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

fn initial(s: &str) -> &str {
    match s.char_indices().nth(1) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Apply `pattern` to `(first, last)` and, if present, `(first, second)`.
fn with_surnames<F>(name: &SplitName, pattern: F) -> BTreeSet<String>
where
    F: Fn(&str, &str) -> String,
{
    let mut names = BTreeSet::new();
    names.insert(pattern(&name.first, &name.last));
    if name.has_second() {
        names.insert(pattern(&name.first, &name.second));
    }
    names
}

/// jsmith
pub fn f_last(name: &SplitName) -> BTreeSet<String> {
    with_surnames(name, |f, l| format!("{}{}", initial(f), l))
}

/// j.smith
pub fn f_dot_last(name: &SplitName) -> BTreeSet<String> {
    with_surnames(name, |f, l| format!("{}.{}", initial(f), l))
}

/// smithj
pub fn last_f(name: &SplitName) -> BTreeSet<String> {
    with_surnames(name, |f, l| format!("{}{}", l, initial(f)))
}

/// john.smith
pub fn first_dot_last(name: &SplitName) -> BTreeSet<String> {
    with_surnames(name, |f, l| format!("{}.{}", f, l))
}

/// johns
pub fn first_l(name: &SplitName) -> BTreeSet<String> {
    with_surnames(name, |f, l| format!("{}{}", f, initial(l)))
}

/// john
pub fn first(name: &SplitName) -> BTreeSet<String> {
    BTreeSet::from([name.first.clone()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn john() -> SplitName {
        SplitName::new("John", "", "Smith").unwrap()
    }

    fn mary() -> SplitName {
        SplitName::new("Mary", "Jane", "Watson").unwrap()
    }

    #[test]
    fn two_part_name_yields_one_candidate_per_rule() {
        let n = john();
        assert_eq!(Rule::FLast.apply(&n), set(&["JSmith"]));
        assert_eq!(Rule::FDotLast.apply(&n), set(&["J.Smith"]));
        assert_eq!(Rule::LastF.apply(&n), set(&["SmithJ"]));
        assert_eq!(Rule::FirstDotLast.apply(&n), set(&["John.Smith"]));
        assert_eq!(Rule::FirstL.apply(&n), set(&["JohnS"]));
        assert_eq!(Rule::First.apply(&n), set(&["John"]));
    }

    #[test]
    fn case_is_preserved() {
        let n = SplitName::new("john", "", "smith").unwrap();
        assert_eq!(f_last(&n), set(&["jsmith"]));
    }

    #[test]
    fn second_part_doubles_every_rule_but_first() {
        let n = mary();
        assert_eq!(Rule::FLast.apply(&n), set(&["MWatson", "MJane"]));
        assert_eq!(Rule::FDotLast.apply(&n), set(&["M.Watson", "M.Jane"]));
        assert_eq!(Rule::LastF.apply(&n), set(&["WatsonM", "JaneM"]));
        assert_eq!(
            Rule::FirstDotLast.apply(&n),
            set(&["Mary.Watson", "Mary.Jane"])
        );
        assert_eq!(Rule::FirstL.apply(&n), set(&["MaryW", "MaryJ"]));
        assert_eq!(Rule::First.apply(&n), set(&["Mary"]));
    }

    #[test]
    fn colliding_candidates_collapse() {
        let n = SplitName::new("Ana", "Silva", "Santos").unwrap();
        assert_eq!(first_l(&n), set(&["AnaS"]));
    }

    #[test]
    fn initials_use_whole_characters() {
        let n = SplitName::new("Émile", "", "Łukasz").unwrap();
        assert_eq!(f_dot_last(&n), set(&["É.Łukasz"]));
        assert_eq!(first_l(&n), set(&["ÉmileŁ"]));
    }

    #[test]
    fn rules_are_pure() {
        let n = mary();
        for rule in Rule::ALL {
            assert_eq!(rule.apply(&n), rule.apply(&n));
        }
    }

    #[test]
    fn ids_parse_back_through_clap() {
        for rule in Rule::ALL {
            assert_eq!(Rule::from_str(rule.id(), false), Ok(rule));
            assert_eq!(rule.to_string(), rule.id());
        }
        assert!(Rule::from_str("flast", false).is_err());
    }
}
