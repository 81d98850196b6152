//! Syntax checks for bare `local-part@domain` addresses.
//!
//! Follows the RFC 5322 addr-spec grammar with RFC 6532 UTF-8 extensions.
//! The local part is a dot-atom or a quoted string; the domain is a
//! dot-atom or a bracketed literal. Display names (`Alice <a@b.c>`) and
//! comments are rejected.

pub const MAX_ADDRESS_LEN: usize = 254;
pub const MAX_LOCAL_PART_LEN: usize = 64;
pub const MAX_LABEL_LEN: usize = 63;

pub fn is_valid_address(address: &str) -> bool {
    if address.is_empty() || address.len() > MAX_ADDRESS_LEN {
        return false;
    }

    // Atoms cannot contain '@', so the last one separates the parts even when
    // a quoted local part holds another.
    let Some((local, domain)) = address.rsplit_once('@') else {
        return false;
    };

    is_valid_local_part(local) && is_valid_domain(domain)
}

pub fn is_valid_local_part(local: &str) -> bool {
    if local.len() > MAX_LOCAL_PART_LEN {
        return false;
    }
    if local.starts_with('"') {
        return is_quoted_string(local);
    }
    is_dot_atom(local)
}

pub fn is_valid_domain(domain: &str) -> bool {
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return !literal.is_empty() && literal.chars().all(is_dtext);
    }

    is_dot_atom(domain) && domain.split('.').all(|label| label.len() <= MAX_LABEL_LEN)
}

/// Non-empty runs of atext separated by single dots.
fn is_dot_atom(value: &str) -> bool {
    !value.is_empty()
        && value
            .split('.')
            .all(|atom| !atom.is_empty() && atom.chars().all(is_atext))
}

/// `"` (qtext / quoted-pair / WSP)* `"`
fn is_quoted_string(value: &str) -> bool {
    let Some(inner) = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return false;
    };

    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) if is_vchar(escaped) || is_wsp(escaped) => {}
                _ => return false,
            },
            c if is_qtext(c) || is_wsp(c) => {}
            _ => return false,
        }
    }
    true
}

fn is_vchar(c: char) -> bool {
    ('!'..='~').contains(&c) || (!c.is_ascii() && !c.is_control())
}

fn is_wsp(c: char) -> bool {
    c == ' ' || c == '\t'
}

fn is_atext(c: char) -> bool {
    is_vchar(c) && !"()<>[]:;@\\,.\"".contains(c)
}

fn is_qtext(c: char) -> bool {
    is_vchar(c) && c != '"' && c != '\\'
}

fn is_dtext(c: char) -> bool {
    is_vchar(c) && c != '[' && c != ']' && c != '\\'
}
