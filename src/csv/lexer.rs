//! Line-level tokenization: cell splitting and delimiter detection.

/// Strips every byte-order mark from a string.
///
/// Sloppy exporters have been seen emitting a BOM not just at the start of
/// the file but at the start of individual cells, so all occurrences go.
#[must_use]
pub fn strip_bom(s: &str) -> String {
    s.replace('\u{feff}', "")
}

/// Detects the delimiter of a line among comma, tab, and semicolon.
///
/// The winner is the character with the strictly highest occurrence count;
/// any tie falls back to comma.
#[must_use]
pub fn detect_delimiter(line: &str) -> char {
    let line = strip_bom(line);
    let commas = line.matches(',').count();
    let tabs = line.matches('\t').count();
    let semis = line.matches(';').count();
    if tabs > commas && tabs > semis {
        '\t'
    } else if semis > commas && semis > tabs {
        ';'
    } else {
        ','
    }
}

/// Splits one physical line into raw cells, honoring RFC 4180 quoting.
///
/// A quote toggles quoted mode; a doubled quote inside quoted mode emits a
/// literal quote; the delimiter only ends a cell outside quoted mode. A
/// trailing carriage return on the last cell is stripped so both line-ending
/// conventions parse identically. An unbalanced trailing quote is tolerated:
/// quoted mode simply stays open to end of input.
///
/// Always returns at least one (possibly empty) cell.
#[must_use]
pub fn split_line(line: &str, delim: char) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                cur.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delim && !in_quotes {
            out.push(std::mem::take(&mut cur));
        } else {
            cur.push(ch);
        }
    }
    out.push(cur);

    if let Some(last) = out.last_mut() {
        if last.ends_with('\r') {
            last.pop();
        }
    }
    out
}

/// Returns true if every cell is empty or whitespace.
#[must_use]
pub fn is_blank_row(cells: &[String]) -> bool {
    cells.iter().all(|c| c.trim().is_empty())
}
