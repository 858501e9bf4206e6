//! ISO 13616 modulo-97 check over the rearranged, digit-expanded IBAN.
//!
//! The numeric form of an IBAN is far larger than any native integer, so it
//! is folded in chunks: a 9-digit head, then 7-digit blocks each prefixed by
//! the previous remainder (at most 2 digits). Every parsed value therefore
//! stays below 10^9 and fits comfortably in a `u64`.

const FIRST_SEGMENT_LEN: usize = 9;
const SEGMENT_LEN: usize = 7;
const MODULUS: u64 = 97;

/// Moves the country code and check digits behind the BBAN.
///
/// Callers guarantee at least four characters; shorter input is returned
/// unchanged.
pub fn rearrange(iban: &str) -> String {
    match iban.char_indices().nth(4) {
        Some((split, _)) => format!("{}{}", &iban[split..], &iban[..split]),
        None => iban.to_string(),
    }
}

/// Maps `A..=Z` to `10..=35`, keeps ASCII digits and drops everything else.
pub fn to_numeric(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 2);
    for ch in input.chars().map(|ch| ch.to_ascii_uppercase()) {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch.is_ascii_uppercase() {
            let val = ch as u32 - 'A' as u32 + 10;
            out.push_str(&val.to_string());
        }
    }
    out
}

pub fn segments(digits: &str) -> Vec<&str> {
    let mut segs = Vec::new();
    if digits.is_empty() {
        return segs;
    }
    let first = FIRST_SEGMENT_LEN.min(digits.len());
    segs.push(&digits[..first]);
    let mut rest = &digits[first..];
    while rest.len() >= SEGMENT_LEN {
        let (head, tail) = rest.split_at(SEGMENT_LEN);
        segs.push(head);
        rest = tail;
    }
    if !rest.is_empty() {
        segs.push(rest);
    }
    segs
}

/// Folds the segments into the remainder modulo 97.
///
/// Returns `None` for an empty segment list or a segment that does not parse;
/// `segments` over `to_numeric` output never produces the latter.
pub fn fold_mod97(segments: &[&str]) -> Option<u64> {
    if segments.is_empty() {
        return None;
    }
    let mut n: u64 = 0;
    for seg in segments {
        let part = if seg.len() == FIRST_SEGMENT_LEN {
            seg.to_string()
        } else {
            format!("{}{}", n, seg)
        };
        match part.parse::<u64>() {
            Ok(value) => n = value % MODULUS,
            Err(err) => {
                log::error!("unparseable checksum segment '{}': {}", part, err);
                return None;
            }
        }
    }
    Some(n)
}

pub fn has_valid_checksum(iban: &str) -> bool {
    let rearranged = rearrange(iban);
    let digits = to_numeric(&rearranged);
    let segs = segments(&digits);
    log::trace!("numeric form {} split into {:?}", digits, segs);

    match fold_mod97(&segs) {
        Some(1) => true,
        Some(remainder) => {
            log::debug!("checksum remainder {} != 1", remainder);
            false
        }
        None => {
            log::debug!("no digits left to checksum");
            false
        }
    }
}
