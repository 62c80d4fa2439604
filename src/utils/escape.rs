//! Escaping of user-supplied literal search terms.
//!
//! Search terms are plain substrings, not patterns. Before compiling them
//! with [`regex`], every metacharacter is neutralized so `a.b*c` matches
//! only the literal text `a.b*c`. `<` and `>` are literal in this regex
//! dialect and must stay bare: `\<`/`\>` are word-boundary assertions.

/// Characters backslash-escaped in every search term.
const METACHARS: &[char] = &['*', '[', ']', '?', '+', '.', '(', ')'];

/// Additional characters escaped by the combined name+content search.
const EXTENDED_METACHARS: &[char] = &['-', '='];

/// Neutralize the base metacharacter set.
pub fn escape_literal(term: &str) -> String {
    escape_with(term, |c| METACHARS.contains(&c))
}

/// Neutralize the base set plus `-` and `=`.
pub fn escape_literal_extended(term: &str) -> String {
    escape_with(term, |c| {
        METACHARS.contains(&c) || EXTENDED_METACHARS.contains(&c)
    })
}

fn escape_with(term: &str, is_meta: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if is_meta(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
