use std::collections::HashMap;

pub const REFERENCE_IBAN_LENGTHS: &[(&str, usize)] = &[
    ("AT", 20),
    ("BE", 16),
    ("CZ", 24),
    ("DE", 22),
    ("DK", 18),
    ("FR", 27),
];

// Country code plus check digits.
const MIN_IBAN_LENGTH: usize = 4;

/// Expected total IBAN length per two-letter country code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryLengthTable {
    lengths: HashMap<String, usize>,
}

impl CountryLengthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reference() -> Self {
        let lengths = REFERENCE_IBAN_LENGTHS
            .iter()
            .map(|(code, len)| (code.to_string(), *len))
            .collect();
        Self { lengths }
    }

    pub fn insert(&mut self, code: &str, length: usize) -> Result<(), String> {
        let code = normalize_country_code(code)
            .ok_or_else(|| format!("IBAN country code must be 2 letters: {}", code.trim()))?;
        if length < MIN_IBAN_LENGTH {
            return Err(format!(
                "IBAN length for {} must be at least {}, got {}",
                code, MIN_IBAN_LENGTH, length
            ));
        }
        if let Some(previous) = self.lengths.insert(code.clone(), length) {
            log::debug!("replaced IBAN length for {}: {} -> {}", code, previous, length);
        }
        Ok(())
    }

    pub fn expected_length(&self, code: &str) -> Option<usize> {
        self.lengths.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }
}

pub fn normalize_country_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Some(trimmed.to_ascii_uppercase())
    } else {
        None
    }
}

/// Parses a `CC=LEN` override as given on the command line.
pub fn parse_override(input: &str) -> Result<(String, usize), String> {
    let (code, length) = input
        .split_once('=')
        .ok_or_else(|| format!("expected COUNTRY=LENGTH, got '{}'", input))?;
    let code = normalize_country_code(code)
        .ok_or_else(|| format!("invalid country code in --country: {}", code.trim()))?;
    let length = length
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("invalid length in --country {}: {}", input, err))?;
    Ok((code, length))
}
