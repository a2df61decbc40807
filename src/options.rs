//! The option store: a typed registry of boolean, integer, and priority-
//! scheme options declared by `#!` lines (spec.md §4.2).
//!
//! A single [`OptionStore`] is built while tokenizing the leading `#!`
//! block and is then passed by shared reference into the parser and the
//! reporter — there is no process-wide singleton (spec.md §9).

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolOption {
    AllowDummies,
    CaseSensitive,
    HideErrors,
    HideLoops,
    HideNontrades,
    HideRepeats,
    HideStats,
    HideSummary,
    RequireColons,
    RequireUsernames,
    ShowElapsedTime,
    ShowMissing,
    SortByItem,
}

impl BoolOption {
    const ALL: &'static [(&'static str, BoolOption)] = &[
        ("ALLOW-DUMMIES", BoolOption::AllowDummies),
        ("CASE-SENSITIVE", BoolOption::CaseSensitive),
        ("HIDE-ERRORS", BoolOption::HideErrors),
        ("HIDE-LOOPS", BoolOption::HideLoops),
        ("HIDE-NONTRADES", BoolOption::HideNontrades),
        ("HIDE-REPEATS", BoolOption::HideRepeats),
        ("HIDE-STATS", BoolOption::HideStats),
        ("HIDE-SUMMARY", BoolOption::HideSummary),
        ("REQUIRE-COLONS", BoolOption::RequireColons),
        ("REQUIRE-USERNAMES", BoolOption::RequireUsernames),
        ("SHOW-ELAPSED-TIME", BoolOption::ShowElapsedTime),
        ("SHOW-MISSING", BoolOption::ShowMissing),
        ("SORT-BY-ITEM", BoolOption::SortByItem),
    ];

    fn from_name(name: &str) -> Option<BoolOption> {
        Self::ALL
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, opt)| *opt)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntOption {
    SmallStep,
    BigStep,
    NontradeCost,
}

impl IntOption {
    const ALL: &'static [(&'static str, IntOption)] = &[
        ("SMALL-STEP", IntOption::SmallStep),
        ("BIG-STEP", IntOption::BigStep),
        ("NONTRADE-COST", IntOption::NontradeCost),
    ];

    fn from_name(name: &str) -> Option<IntOption> {
        Self::ALL
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, opt)| *opt)
    }

    fn default_value(self) -> i64 {
        match self {
            IntOption::SmallStep => 1,
            IntOption::BigStep => 9,
            IntOption::NontradeCost => 1_000_000_000,
        }
    }
}

/// A priority scheme name, recognized or not (spec.md §4.2, §4.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriorityScheme {
    None,
    Linear,
    Triangle,
    Square,
    Scaled,
    /// Syntactically valid (`*-PRIORITIES`) but not one of the recognized
    /// schemes; the cost model fails at evaluation time if this is ever
    /// used (spec.md §4.5).
    Unrecognized(String),
}

impl PriorityScheme {
    fn parse(name: &str) -> Option<PriorityScheme> {
        match name {
            "LINEAR-PRIORITIES" => Some(PriorityScheme::Linear),
            "TRIANGLE-PRIORITIES" => Some(PriorityScheme::Triangle),
            "SQUARE-PRIORITIES" => Some(PriorityScheme::Square),
            "SCALED-PRIORITIES" => Some(PriorityScheme::Scaled),
            _ if name.ends_with("-PRIORITIES") => {
                Some(PriorityScheme::Unrecognized(name.to_string()))
            }
            _ => None,
        }
    }

    /// Parses the short, case-insensitive scheme name used by the
    /// `--priorities` CLI flag (spec.md §6 SUPPLEMENT), e.g. `linear` or
    /// `LINEAR`, rather than the want-file's `LINEAR-PRIORITIES` term.
    pub fn parse_cli(name: &str) -> PriorityScheme {
        let upper = name.to_uppercase();
        match Self::parse(&format!("{upper}-PRIORITIES")) {
            Some(scheme) => scheme,
            None if upper == "NONE" => PriorityScheme::None,
            None => PriorityScheme::Unrecognized(upper),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown option `{name}`")]
    Unknown { name: String },
    #[error("option `{name}` specified after parsing has begun")]
    AfterParsingStarted { name: String },
    #[error("option `{name}` expects an integer value, got `{value}`")]
    InvalidIntValue { name: String, value: String },
}

/// Typed registry of boolean, integer, and priority-scheme options.
#[derive(Debug)]
pub struct OptionStore {
    bools: HashMap<BoolOption, bool>,
    ints: HashMap<IntOption, i64>,
    priority_scheme: PriorityScheme,
    /// Once true, any further `set_*` call is an error (spec.md §4.2:
    /// "Options may only appear before the first directive or payload
    /// line").
    locked: bool,
}

impl Default for OptionStore {
    fn default() -> Self {
        OptionStore {
            bools: HashMap::new(),
            ints: HashMap::new(),
            priority_scheme: PriorityScheme::None,
            locked: false,
        }
    }
}

impl OptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn bool_opt(&self, opt: BoolOption) -> bool {
        self.bools.get(&opt).copied().unwrap_or(false)
    }

    /// Sets a boolean option directly, bypassing the locked-after-parsing
    /// rule. Used by the CLI to apply `--show-non-trades`/
    /// `--hide-non-trades` overrides after the want-file has already been
    /// fully parsed (spec.md §6 SUPPLEMENT).
    pub fn set_bool_opt(&mut self, opt: BoolOption, value: bool) {
        self.bools.insert(opt, value);
    }

    pub fn int_opt(&self, opt: IntOption) -> i64 {
        self.ints.get(&opt).copied().unwrap_or(opt.default_value())
    }

    pub fn priority_scheme(&self) -> &PriorityScheme {
        &self.priority_scheme
    }

    pub fn set_priority_scheme(&mut self, scheme: PriorityScheme) {
        self.priority_scheme = scheme;
    }

    /// Applies every term on one `#!` line, already flattened into a token
    /// stream by the tokenizer (spec.md §4.2). An integer option name
    /// consumes the following token as its value; everything else is
    /// applied as a zero-argument bool/priority-scheme term.
    pub fn apply_line(&mut self, tokens: &[String]) -> Vec<OptionError> {
        let mut errors = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let name = &tokens[i];
            if IntOption::from_name(name).is_some() {
                if let Some(value) = tokens.get(i + 1) {
                    if let Err(e) = self.apply_term(name, Some(value)) {
                        errors.push(e);
                    }
                    i += 2;
                } else {
                    errors.push(OptionError::InvalidIntValue {
                        name: name.clone(),
                        value: String::new(),
                    });
                    i += 1;
                }
            } else {
                if let Err(e) = self.apply_term(name, None) {
                    errors.push(e);
                }
                i += 1;
            }
        }
        errors
    }

    /// Applies one `NAME` or `NAME=value` term parsed from a `#!` line.
    /// Boolean options are idempotent when repeated; repeating a priority
    /// scheme keeps the last value (spec.md §4.2).
    pub fn apply_term(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        if self.locked {
            return Err(OptionError::AfterParsingStarted {
                name: name.to_string(),
            });
        }
        if let Some(scheme) = PriorityScheme::parse(name) {
            self.priority_scheme = scheme;
            return Ok(());
        }
        if let Some(opt) = IntOption::from_name(name) {
            let raw = value.ok_or_else(|| OptionError::InvalidIntValue {
                name: name.to_string(),
                value: String::new(),
            })?;
            let parsed: i64 = raw.parse().map_err(|_| OptionError::InvalidIntValue {
                name: name.to_string(),
                value: raw.to_string(),
            })?;
            self.ints.insert(opt, parsed);
            return Ok(());
        }
        if let Some(opt) = BoolOption::from_name(name) {
            self.bools.insert(opt, true);
            return Ok(());
        }
        Err(OptionError::Unknown {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let store = OptionStore::new();
        assert_eq!(store.int_opt(IntOption::SmallStep), 1);
        assert_eq!(store.int_opt(IntOption::BigStep), 9);
        assert_eq!(store.int_opt(IntOption::NontradeCost), 1_000_000_000);
        assert!(!store.bool_opt(BoolOption::AllowDummies));
        assert_eq!(store.priority_scheme(), &PriorityScheme::None);
    }

    #[test]
    fn repeated_bool_is_idempotent() {
        let mut store = OptionStore::new();
        store.apply_term("ALLOW-DUMMIES", None).unwrap();
        store.apply_term("ALLOW-DUMMIES", None).unwrap();
        assert!(store.bool_opt(BoolOption::AllowDummies));
    }

    #[test]
    fn repeating_priority_scheme_keeps_last() {
        let mut store = OptionStore::new();
        store.apply_term("LINEAR-PRIORITIES", None).unwrap();
        store.apply_term("SQUARE-PRIORITIES", None).unwrap();
        assert_eq!(store.priority_scheme(), &PriorityScheme::Square);
    }

    #[test]
    fn unrecognized_priorities_name_is_accepted_syntactically() {
        let mut store = OptionStore::new();
        store.apply_term("FOO-PRIORITIES", None).unwrap();
        assert_eq!(
            store.priority_scheme(),
            &PriorityScheme::Unrecognized("FOO-PRIORITIES".to_string())
        );
    }

    #[test]
    fn unknown_option_is_an_error() {
        let mut store = OptionStore::new();
        assert!(matches!(
            store.apply_term("NOT-AN-OPTION", None),
            Err(OptionError::Unknown { .. })
        ));
    }

    #[test]
    fn apply_line_pairs_int_option_with_following_token() {
        let mut store = OptionStore::new();
        let errors = store.apply_line(&["SMALL-STEP".to_string(), "0".to_string()]);
        assert!(errors.is_empty());
        assert_eq!(store.int_opt(IntOption::SmallStep), 0);
    }

    #[test]
    fn apply_line_handles_multiple_terms() {
        let mut store = OptionStore::new();
        let tokens = vec![
            "ALLOW-DUMMIES".to_string(),
            "REQUIRE-USERNAMES".to_string(),
            "BIG-STEP".to_string(),
            "9".to_string(),
        ];
        let errors = store.apply_line(&tokens);
        assert!(errors.is_empty());
        assert!(store.bool_opt(BoolOption::AllowDummies));
        assert!(store.bool_opt(BoolOption::RequireUsernames));
        assert_eq!(store.int_opt(IntOption::BigStep), 9);
    }

    #[test]
    fn parse_cli_accepts_lowercase_short_names() {
        assert_eq!(PriorityScheme::parse_cli("linear"), PriorityScheme::Linear);
        assert_eq!(PriorityScheme::parse_cli("NONE"), PriorityScheme::None);
    }

    #[test]
    fn set_bool_opt_overrides_even_when_locked() {
        let mut store = OptionStore::new();
        store.lock();
        store.set_bool_opt(BoolOption::HideNontrades, true);
        assert!(store.bool_opt(BoolOption::HideNontrades));
    }

    #[test]
    fn locked_store_rejects_further_options() {
        let mut store = OptionStore::new();
        store.lock();
        assert!(matches!(
            store.apply_term("ALLOW-DUMMIES", None),
            Err(OptionError::AfterParsingStarted { .. })
        ));
    }
}
