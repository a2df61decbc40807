//! Top-level error plumbing (spec.md §7).
//!
//! Lexical/semantic/reference diagnostics are *data*, collected with line
//! numbers by the parser rather than aborting it (`ParseError` below, held
//! in a `Diagnostics` list). Solver and invariant violations are fatal and
//! propagate as a single `Result::Err` (`SolveError`), matching "Solver and
//! invariant errors are fatal to the current solve" from §7.

use thiserror::Error;

use crate::cost::CostError;
use crate::options::OptionError;
use crate::parser::directives::OfficialNameError;

/// One diagnostic raised while parsing a want-file line (spec.md §7
/// taxonomy: lexical, semantic, reference).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Option(#[from] OptionError),
    #[error("option `{name}` specified after parsing has begun")]
    OptionAfterParsingStarted { name: String },
    #[error(transparent)]
    OfficialName(#[from] OfficialNameError),
    #[error("`!{0}` is not a recognized directive")]
    UnknownDirective(String),
    #[error("!BEGIN-OFFICIAL-NAMES must appear before any want-list")]
    OfficialNamesAfterWantlist,
    #[error("duplicate official-name declaration for item `{id}`")]
    DuplicateOfficialName { id: String },
    #[error("missing username from want list")]
    MissingUsername,
    #[error("missing offered item (source) from want list")]
    MissingSource,
    #[error("dummy item `{id}` is not allowed (ALLOW-DUMMIES is not set)")]
    DummyNotAllowed { id: String },
    #[error("dummy item `{id}` requires a username")]
    DummyWithoutUsername { id: String },
    #[error("non-dummy item `{id}` has no official name (hint: spelling error?)")]
    UnknownSourceWithOfficialNames { id: String },
    #[error("missing colon from want list")]
    MissingColon,
    #[error("colon not allowed among wanted items")]
    ColonAmongTargets,
    #[error("unbalanced parentheses in want list line")]
    UnbalancedParens,
    #[error("forbidden character in token `{token}`")]
    ForbiddenCharacter { token: String },
    #[error("duplicate want-list for item `{id}`")]
    DuplicateWantlist { id: String },
}

/// Fatal solver/invariant failure (spec.md §7, "Solver" category). These
/// abort the pipeline after writing any diagnostics gathered so far.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error(transparent)]
    Cost(#[from] CostError),
    #[error("min-cost-flow oracle reported the instance as infeasible")]
    Infeasible,
    #[error("internal invariant violation: item `{id}` was assigned more than one chosen arc")]
    InvariantViolation { id: String },
}
