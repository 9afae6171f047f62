//! Identifier case conversion.
//!
//! Proto identifiers are usually `snake_case` (fields, packages) or
//! `CamelCase` (messages, services, methods). Ruby constants need a leading
//! capital, and Twirp handler methods are looked up by their `snake_case`
//! form, so both directions are needed.
//!
//! The two functions are deliberately *not* inverses of each other:
//! `to_camel_case` keeps acronyms and digit runs verbatim instead of
//! re-splitting them.

/// Word separator in `snake_case` identifiers.
pub const SEPARATOR: char = '_';

/// Emitted in place of a leading separator so the result is still a valid
/// Ruby constant (`_foo` -> `XFoo`).
pub const PLACEHOLDER_LETTER: char = 'X';

/// `CamelCase` -> `snake_case`.
///
/// Every uppercase character except the first gets a separator in front of
/// it, and all characters are lowercased. Digits and existing separators pass
/// through untouched, so `HTTPServer2` becomes `h_t_t_p_server2`.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + s.len() / 2);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && c.is_uppercase() {
            out.push(SEPARATOR);
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// `snake_case` -> `CamelCase`.
///
/// Works a word at a time, where words start at a separator or at an
/// uppercase letter / digit:
///
/// - a separator followed by a lowercase letter or digit is dropped and the
///   following letter is capitalized (`my_field` -> `MyField`);
/// - any other separator is kept (`a__b` -> `A_B`, trailing `_` stays);
/// - uppercase runs and digit runs are copied as-is (`HTTPServer2` stays
///   `HTTPServer2`);
/// - a leading separator becomes [`PLACEHOLDER_LETTER`]
///   (`_my_field_name_2` -> `XMyFieldName2`).
pub fn to_camel_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len() + 1);

    let mut i = 0;
    if chars.first() == Some(&SEPARATOR) {
        out.push(PLACEHOLDER_LETTER);
        i += 1;
    }

    while i < chars.len() {
        let c = chars[i];
        if c == SEPARATOR && chars.get(i + 1).is_some_and(|&next| continues_word(next)) {
            i += 1;
            continue;
        }

        // First character of a word: never lowercase in the output.
        out.push(c.to_ascii_uppercase());

        while let Some(&next) = chars.get(i + 1) {
            if !continues_word(next) {
                break;
            }
            out.push(next);
            i += 1;
        }
        i += 1;
    }

    out
}

fn continues_word(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
