//! `!BEGIN-OFFICIAL-NAMES` / `!END-OFFICIAL-NAMES` mode and the official-
//! name line grammar (spec.md §4.4, §6):
//! `ITEM ==> "NAME" (from USER) [copy K of N]?`

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OfficialNameError {
    #[error("malformed official-name line: expected `ITEM ==> \"NAME\" (from USER)`")]
    Malformed,
}

pub struct OfficialName {
    pub item_id: String,
    pub name: String,
    pub username: String,
}

/// Parses one tokenized official-names line. Surrounding quotation marks
/// are stripped from the name and interior backslashes are replaced with
/// forward slashes (spec.md §3, "Normalization").
pub fn parse_official_name_line(tokens: &[String]) -> Result<OfficialName, OfficialNameError> {
    if tokens.len() < 3 || tokens[1] != "==>" {
        return Err(OfficialNameError::Malformed);
    }
    let item_id = tokens[0].clone();
    let name = strip_quotes_and_escape(&tokens[2]);

    let username = tokens
        .iter()
        .skip(3)
        .find_map(|t| {
            let inner = t.strip_prefix('(')?.strip_suffix(')')?;
            inner.strip_prefix("from ").map(|u| u.trim().to_string())
        })
        .ok_or(OfficialNameError::Malformed)?;

    Ok(OfficialName {
        item_id,
        name,
        username,
    })
}

fn strip_quotes_and_escape(raw: &str) -> String {
    let stripped = raw.strip_prefix('"').unwrap_or(raw);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_line() {
        let tokens = vec![
            "0001-PANDE".to_string(),
            "==>".to_string(),
            "\"Pandemic\"".to_string(),
            "(from alice)".to_string(),
            "[copy 1 of 2]".to_string(),
        ];
        let parsed = parse_official_name_line(&tokens).unwrap();
        assert_eq!(parsed.item_id, "0001-PANDE");
        assert_eq!(parsed.name, "Pandemic");
        assert_eq!(parsed.username, "alice");
    }

    #[test]
    fn copy_clause_is_optional() {
        let tokens = vec![
            "0002-PUERIC".to_string(),
            "==>".to_string(),
            "\"Puerto Rico\"".to_string(),
            "(from bob)".to_string(),
        ];
        assert!(parse_official_name_line(&tokens).is_ok());
    }

    #[test]
    fn backslashes_become_forward_slashes() {
        let tokens = vec![
            "X".to_string(),
            "==>".to_string(),
            "\"A\\B\"".to_string(),
            "(from u)".to_string(),
        ];
        let parsed = parse_official_name_line(&tokens).unwrap();
        assert_eq!(parsed.name, "A/B");
    }

    #[test]
    fn missing_arrow_is_malformed() {
        let tokens = vec!["X".to_string(), "\"A\"".to_string()];
        assert_eq!(
            parse_official_name_line(&tokens),
            Err(OfficialNameError::Malformed)
        );
    }
}
