//! Context name matching.
//!
//! Anchored glob patterns with `*` (any run of characters, possibly empty) and
//! `?` (exactly one character). Matching is case-sensitive and the whole name
//! must match. A pattern without wildcards only matches itself.

use crate::error::ApiError;

/// Returns true if `name` matches `pattern` in full.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0usize, 0usize);
    // Position of the last `*` seen and the name index it was tried against.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some('?') => {
                p += 1;
                n += 1;
            }
            Some(c) if *c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((star_p, star_n)) => {
                    // Let the last star absorb one more character.
                    backtrack = Some((star_p, star_n + 1));
                    p = star_p + 1;
                    n = star_n + 1;
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|c| *c == '*')
}

/// Names matching `pattern`, sorted ascending and deduplicated.
///
/// Zero matches (including an empty candidate set) is `NoMatch`, so callers can
/// tell "nothing to do" apart from "did nothing".
pub fn match_names<I, S>(pattern: &str, names: I) -> Result<Vec<String>, ApiError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut matches: Vec<String> = names
        .into_iter()
        .filter(|name| glob_match(pattern, name.as_ref()))
        .map(|name| name.as_ref().to_string())
        .collect();

    if matches.is_empty() {
        return Err(ApiError::NoMatch(pattern.to_string()));
    }

    matches.sort();
    matches.dedup();
    Ok(matches)
}
