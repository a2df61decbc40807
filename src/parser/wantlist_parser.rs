//! Want-list line grammar and rank bookkeeping (spec.md §4.4).
//!
//! `A : B C ; D` with defaults (`SMALL-STEP=1`, `BIG-STEP=9`) yields ranks
//! `B=1, C=2, D=12`: the small-step advance happens only after a *target*
//! is recorded, while `;` advances the rank by `BIG-STEP` on its own
//! (grounded in the two worked examples of spec.md §4.4/§8, which only
//! agree with each other — and not with `original_source/src/wantparser.cpp`'s
//! `addTargetItems_`, which advances by `SMALL-STEP` after every token
//! including `;` — under this reading; see DESIGN.md).

use crate::error::ParseError;
use crate::model::graph::ItemGraph;
use crate::model::item::{is_dummy_identifier, Item, ItemId};
use crate::model::wantlist::Wantlist;
use crate::options::{BoolOption, OptionStore};

use super::registry::{get_or_insert_source, normalize_item_id};

/// Characters forbidden inside a want-list suffix token, excluding the
/// structural `:`/`;` tokens themselves (spec.md §4.1).
const FORBIDDEN_CHARS: &[char] = &[
    '`', '~', '!', '@', '#', '$', '^', '&', '*', '=', '+', '(', ')', '{', '}', '[', ']', '\\',
    '|', ';', '\'', '"', ',', '.', '<', '>', '/', '?',
];

fn has_forbidden_char(token: &str) -> bool {
    token.chars().any(|c| FORBIDDEN_CHARS.contains(&c))
}

/// Result of successfully parsing one want-list line: the resolved source
/// item, its tentative bundle, and any duplicate targets encountered
/// (first occurrence kept, spec.md §3 Invariant 2).
pub struct ParsedWantlist {
    pub source: ItemId,
    pub bundle: Wantlist,
    /// Raw (normalized) target ids that repeated within this bundle.
    pub duplicates: Vec<String>,
}

fn extract_username(token: &str) -> Option<&str> {
    token.strip_prefix('(')?.strip_suffix(')')
}

fn parens_balanced(tokens: &[String]) -> bool {
    let mut opens = 0i32;
    for token in tokens {
        for c in token.chars() {
            match c {
                '(' => opens += 1,
                ')' => opens -= 1,
                _ => {}
            }
        }
    }
    opens == 0
}

/// Parses one tokenized want-list line per spec.md §4.4 steps 1-10. On any
/// error, processing stops immediately and the whole line is discarded by
/// the caller (step 11) — no partial commit.
pub fn parse_wantlist_line(
    tokens: &[String],
    graph: &mut ItemGraph,
    options: &OptionStore,
    official_names_declared: bool,
) -> Result<ParsedWantlist, ParseError> {
    let mut pos = 0;

    // Step 1: username.
    let username: Option<String> = tokens.first().and_then(|t| extract_username(t)).map(|u| {
        pos += 1;
        u.to_string()
    });
    if username.is_none() && options.bool_opt(BoolOption::RequireUsernames) {
        return Err(ParseError::MissingUsername);
    }

    // Step 2: source item.
    let raw_source = tokens.get(pos).ok_or(ParseError::MissingSource)?;
    pos += 1;

    // Step 3: normalize source.
    let case_sensitive = options.bool_opt(BoolOption::CaseSensitive);
    let is_dummy = is_dummy_identifier(raw_source);
    if is_dummy {
        if !options.bool_opt(BoolOption::AllowDummies) {
            return Err(ParseError::DummyNotAllowed {
                id: raw_source.clone(),
            });
        }
        if username.is_none() {
            return Err(ParseError::DummyWithoutUsername {
                id: raw_source.clone(),
            });
        }
    }
    let source_id = normalize_item_id(raw_source, username.as_deref(), case_sensitive);

    // Step 4: register source.
    if official_names_declared && !is_dummy && graph.get(&source_id).is_none() {
        return Err(ParseError::UnknownSourceWithOfficialNames { id: source_id });
    }
    let source = get_or_insert_source(graph, &source_id, is_dummy);
    if let Some(u) = &username {
        if graph.item(source).owner.is_none() {
            graph.item_mut(source).owner = Some(u.clone());
        }
    }

    // Step 5/6: colon.
    if tokens.get(pos).map(String::as_str) == Some(":") {
        pos += 1;
    } else if options.bool_opt(BoolOption::RequireColons) {
        return Err(ParseError::MissingColon);
    }

    // Step 7: parenthesis balance, over the whole line.
    if !parens_balanced(tokens) {
        return Err(ParseError::UnbalancedParens);
    }

    // Step 8: forbidden characters, scanned over the post-source suffix
    // (the target region): bare `:`/`;` are structural and exempt.
    for token in &tokens[pos..] {
        if token == ":" || token == ";" {
            continue;
        }
        if has_forbidden_char(token) {
            return Err(ParseError::ForbiddenCharacter {
                token: token.clone(),
            });
        }
    }

    // Step 9: reject a second want-list for this source.
    if graph.has_wantlist(source) {
        return Err(ParseError::DuplicateWantlist { id: source_id });
    }

    // Step 10: iterate targets, tracking rank.
    let small_step = options.int_opt(crate::options::IntOption::SmallStep);
    let big_step = options.int_opt(crate::options::IntOption::BigStep);
    let mut rank = 1i64;
    let mut bundle = Wantlist::new(source);
    let mut duplicates = Vec::new();

    for token in &tokens[pos..] {
        if token == ";" {
            rank += big_step;
            continue;
        }
        if token == ":" {
            return Err(ParseError::ColonAmongTargets);
        }
        let target_id = normalize_item_id(token, username.as_deref(), case_sensitive);
        if !bundle.push(target_id.clone(), rank) {
            duplicates.push(target_id);
        }
        rank += small_step;
    }

    Ok(ParsedWantlist {
        source,
        bundle,
        duplicates,
    })
}

/// Inserts a bare item record for a want-list source that has no prior
/// entry, mirroring spec.md §4.3's "Want-list source" creation path. Kept
/// separate from [`get_or_insert_source`] so official-names insertion
/// (directives.rs) stays the only other creation path.
#[allow(dead_code)]
pub fn new_bare_item(id: String, is_dummy: bool) -> Item {
    Item::new(id, is_dummy)
}
