use crate::checksum::has_valid_checksum;
use crate::reference::CountryLengthTable;

#[derive(Debug, Clone)]
pub struct IbanValidator {
    lengths: CountryLengthTable,
}

impl Default for IbanValidator {
    fn default() -> Self {
        Self::new(CountryLengthTable::reference())
    }
}

impl IbanValidator {
    pub fn new(lengths: CountryLengthTable) -> Self {
        Self { lengths }
    }

    /// Checks country length and the modulo-97 checksum.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` is the absent input and is
    /// invalid. Spaces are ignored, case is not significant. Every failure
    /// collapses to `false`.
    pub fn validate<'a>(&self, iban: impl Into<Option<&'a str>>) -> bool {
        let Some(iban) = iban.into() else {
            log::debug!("no IBAN given");
            return false;
        };
        let iban = normalize(iban);
        if !self.check_length(&iban) {
            return false;
        }
        has_valid_checksum(&iban)
    }

    fn check_length(&self, iban: &str) -> bool {
        let length = iban.chars().count();
        if length < 4 {
            log::debug!("IBAN '{}' is too short", iban);
            return false;
        }
        let country: String = iban
            .chars()
            .take(2)
            .map(|ch| ch.to_ascii_uppercase())
            .collect();
        match self.lengths.expected_length(&country) {
            Some(expected) if expected == length => true,
            Some(expected) => {
                log::debug!(
                    "IBAN length {} does not match {} for {}",
                    length,
                    expected,
                    country
                );
                false
            }
            None => {
                log::debug!("IBAN length not known for country {}", country);
                false
            }
        }
    }
}

/// Strips ASCII spaces; tabs and other whitespace are kept.
pub fn normalize(iban: &str) -> String {
    iban.replace(' ', "")
}
