//! Reusable text patterns shared by all networks
//!
//! Every function here is a pure, allocation-free view over its input. They
//! return `None` when the pattern does not apply so callers can chain them
//! in a fixed precedence order.

/// Separators accepted between a place prefix and the rest of the name,
/// longest first
pub const PLACE_SEPARATORS: [&str; 4] = [", ", " - ", " ", "-"];

/// Trim and drop blank input
#[must_use]
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Split at the first comma that is not nested inside `(...)` or `[...]`
///
/// Both halves are trimmed. Returns `None` if there is no top-level comma.
#[must_use]
pub fn first_top_level_comma(s: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return Some((s[..i].trim(), s[i + 1..].trim())),
            _ => {},
        }
    }
    None
}

/// Split at the last top-level comma
#[must_use]
pub fn last_top_level_comma(s: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    let mut last = None;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => last = Some(i),
            _ => {},
        }
    }
    last.map(|i| (s[..i].trim(), s[i + 1..].trim()))
}

/// Number of top-level commas
#[must_use]
pub fn top_level_comma_count(s: &str) -> usize {
    let mut depth = 0usize;
    let mut count = 0;
    for c in s.chars() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => count += 1,
            _ => {},
        }
    }
    count
}

/// Strip a literal place prefix followed by one of [`PLACE_SEPARATORS`]
///
/// Returns the trimmed remainder, or `None` if the prefix does not match or
/// nothing would remain.
#[must_use]
pub fn strip_place_prefix<'a>(s: &'a str, place: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(place)?;
    PLACE_SEPARATORS
        .iter()
        .find_map(|sep| rest.strip_prefix(sep))
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

/// Split `"Name (Place)"` into `(place, name)`
///
/// The group is the one closed by the final `)`, so a place may itself
/// carry parentheses (`"Bahnhof (Frankfurt (Oder))"`). It must be at least
/// `min_place_len` characters long, shorter groups are annotations such as
/// `(S)` or `(U)`.
#[must_use]
pub fn paren_place(s: &str, min_place_len: usize) -> Option<(&str, &str)> {
    let inner = s.strip_suffix(')')?;
    let mut depth = 0usize;
    let mut open = None;
    for (i, c) in inner.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' if depth == 0 => {
                open = Some(i);
                break;
            },
            '(' => depth -= 1,
            _ => {},
        }
    }
    let open = open?;
    let name = inner[..open].strip_suffix(' ')?.trim();
    let place = inner[open + 1..].trim();
    if place.chars().count() < min_place_len || name.is_empty() {
        return None;
    }
    Some((place, name))
}

/// Drop a trailing `[...]` annotation
#[must_use]
pub fn strip_bracketed_suffix(s: &str) -> Option<&str> {
    let inner = s.strip_suffix(']')?;
    let open = inner.rfind('[')?;
    let rest = inner[..open].trim_end();
    (!rest.is_empty()).then_some(rest)
}

/// Drop a literal trailing annotation such as `" (Bus)"`
#[must_use]
pub fn strip_literal_suffix<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let rest = s.strip_suffix(suffix)?.trim_end();
    (!rest.is_empty()).then_some(rest)
}

/// Split `"12345 Town, Street 1"` into `(town, street)`, dropping the
/// four- or five-digit postcode
#[must_use]
pub fn postcode_place(s: &str) -> Option<(&str, &str)> {
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if !(4..=5).contains(&digits) {
        return None;
    }
    let after_code = &s[digits..];
    if !after_code.starts_with(char::is_whitespace) {
        return None;
    }
    let (town, street) = first_top_level_comma(after_code)?;
    (!town.is_empty() && !street.is_empty()).then_some((town, street))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_comma_splits_once() {
        assert_eq!(
            first_top_level_comma("Aachen, Hauptbahnhof"),
            Some(("Aachen", "Hauptbahnhof"))
        );
        assert_eq!(
            first_top_level_comma("A, B, C"),
            Some(("A", "B, C"))
        );
        assert_eq!(first_top_level_comma("Hauptbahnhof"), None);
    }

    #[test]
    fn first_comma_ignores_nested() {
        assert_eq!(
            first_top_level_comma("Schule (Nord, Eingang), Essen"),
            Some(("Schule (Nord, Eingang)", "Essen"))
        );
        assert_eq!(first_top_level_comma("Halt [a, b]"), None);
    }

    #[test]
    fn empty_component_before_comma() {
        assert_eq!(first_top_level_comma(", Markt"), Some(("", "Markt")));
    }

    #[test]
    fn last_comma() {
        assert_eq!(last_top_level_comma("A, B, C"), Some(("A, B", "C")));
        assert_eq!(last_top_level_comma("A"), None);
    }

    #[test]
    fn comma_count() {
        assert_eq!(top_level_comma_count("A, B (x, y), C"), 2);
        assert_eq!(top_level_comma_count("A"), 0);
    }

    #[test]
    fn place_prefix_separators() {
        assert_eq!(strip_place_prefix("Mainz Hbf", "Mainz"), Some("Hbf"));
        assert_eq!(strip_place_prefix("Mainz-Kastel", "Mainz"), Some("Kastel"));
        assert_eq!(strip_place_prefix("Mainz, Hbf", "Mainz"), Some("Hbf"));
        assert_eq!(strip_place_prefix("Mainz - Hbf", "Mainz"), Some("Hbf"));
        assert_eq!(strip_place_prefix("Mainzer Str.", "Mainz"), None);
        assert_eq!(strip_place_prefix("Mainz", "Mainz"), None);
        assert_eq!(strip_place_prefix("Mainz ", "Mainz"), None);
    }

    #[test]
    fn paren_place_requires_three_chars() {
        assert_eq!(
            paren_place("Hauptstr. (Potsdam)", 3),
            Some(("Potsdam", "Hauptstr."))
        );
        assert_eq!(paren_place("Alexanderplatz (U)", 3), None);
        assert_eq!(paren_place("(Berlin)", 3), None);
        assert_eq!(paren_place("Markt", 3), None);
    }

    #[test]
    fn paren_place_keeps_nested_group_whole() {
        assert_eq!(
            paren_place("Bahnhof (Frankfurt (Oder))", 3),
            Some(("Frankfurt (Oder)", "Bahnhof"))
        );
        assert_eq!(paren_place("Markt(Potsdam)", 3), None);
        assert_eq!(paren_place("Markt (Potsdam))", 3), None);
    }

    #[test]
    fn bracketed_suffix() {
        assert_eq!(
            strip_bracketed_suffix("Rathaus Spandau [Bus Carl-Schurz-Str.]"),
            Some("Rathaus Spandau")
        );
        assert_eq!(strip_bracketed_suffix("[Bus]"), None);
        assert_eq!(strip_bracketed_suffix("Rathaus"), None);
    }

    #[test]
    fn literal_suffix() {
        assert_eq!(strip_literal_suffix("Markt (Bus)", " (Bus)"), Some("Markt"));
        assert_eq!(strip_literal_suffix(" (Bus)", " (Bus)"), None);
    }

    #[test]
    fn postcode_place_drops_code() {
        assert_eq!(
            postcode_place("28195 Bremen, Am Wall 1"),
            Some(("Bremen", "Am Wall 1"))
        );
        assert_eq!(postcode_place("123 Bremen, Am Wall"), None);
        assert_eq!(postcode_place("28195Bremen, Am Wall"), None);
        assert_eq!(postcode_place("28195 Bremen"), None);
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank(Some("  a ")), Some("a"));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
