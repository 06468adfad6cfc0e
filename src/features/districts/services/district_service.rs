use crate::features::districts::data::DISTRICT_DIVISIONS;
use crate::modules::geocoding::AreaGuess;

pub type ReferenceTable = &'static [(&'static str, &'static [&'static str])];

/// Outcome of resolving a reverse-geocoded guess against the reference table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AreaResolution {
    /// District found; division only when one of its divisions also matched
    Matched {
        district: &'static str,
        ds_division: Option<&'static str>,
    },
    /// No district matched the raw guess
    DistrictNotMatched { raw_guess: String },
}

/// Loose, case-insensitive match of a free-text guess against candidate names.
///
/// A candidate matches when either string contains the other. The first
/// matching candidate in iteration order wins, even if a later one is a
/// closer fit. Blank guesses never match.
pub fn match_reference<'a, I>(guess: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = guess.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    candidates.into_iter().find(|candidate| {
        let candidate = candidate.to_lowercase();
        candidate.contains(&needle) || needle.contains(&candidate)
    })
}

/// Read access to the district → division reference table
#[derive(Clone, Copy)]
pub struct DistrictService {
    table: ReferenceTable,
}

impl DistrictService {
    pub fn new() -> Self {
        Self::with_table(DISTRICT_DIVISIONS)
    }

    pub fn with_table(table: ReferenceTable) -> Self {
        Self { table }
    }

    /// Districts in table order
    pub fn districts(&self) -> impl Iterator<Item = &'static str> {
        let table = self.table;
        table.iter().map(|(district, _)| *district)
    }

    /// All entries in table order
    pub fn entries(&self) -> ReferenceTable {
        self.table
    }

    /// Divisions of a district, by exact name
    pub fn divisions_of(&self, district: &str) -> Option<&'static [&'static str]> {
        self.table
            .iter()
            .find(|(name, _)| *name == district)
            .map(|(_, divisions)| *divisions)
    }

    /// Canonical spelling of a district, ignoring case
    pub fn canonical_district(&self, name: &str) -> Option<&'static str> {
        let name = name.trim();
        self.districts().find(|d| d.eq_ignore_ascii_case(name))
    }

    pub fn is_valid_division(&self, district: &str, ds_division: &str) -> bool {
        self.divisions_of(district)
            .is_some_and(|divisions| divisions.contains(&ds_division))
    }

    /// Match a reverse-geocoded guess to a district and, if possible, a division
    pub fn resolve(&self, guess: &AreaGuess) -> AreaResolution {
        let Some(district) = match_reference(&guess.district, self.districts()) else {
            tracing::debug!("No district matches guess '{}'", guess.district);
            return AreaResolution::DistrictNotMatched {
                raw_guess: guess.district.clone(),
            };
        };

        let ds_division = self
            .divisions_of(district)
            .and_then(|divisions| match_reference(&guess.ds_division, divisions.iter().copied()));

        tracing::debug!(
            "Resolved guess '{}' / '{}' -> {} / {:?}",
            guess.district,
            guess.ds_division,
            district,
            ds_division
        );

        AreaResolution::Matched {
            district,
            ds_division,
        }
    }
}

impl Default for DistrictService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(district: &str, ds_division: &str) -> AreaGuess {
        AreaGuess {
            district: district.to_string(),
            ds_division: ds_division.to_string(),
        }
    }

    #[test]
    fn test_match_reference_either_direction() {
        let candidates = ["Colombo", "Gampaha", "Kalutara"];
        // guess contains candidate
        assert_eq!(
            match_reference("Colombo District", candidates),
            Some("Colombo")
        );
        // candidate contains guess
        assert_eq!(match_reference("gamp", candidates), Some("Gampaha"));
        assert_eq!(match_reference("KALUTARA", candidates), Some("Kalutara"));
        assert_eq!(match_reference("Jaffna", candidates), None);
    }

    #[test]
    fn test_match_reference_first_match_wins() {
        let candidates = ["Vavuniya", "Vavuniya North", "Vavuniya South"];
        assert_eq!(
            match_reference("Vavuniya South", candidates),
            Some("Vavuniya")
        );
    }

    #[test]
    fn test_match_reference_blank_guess() {
        assert_eq!(match_reference("", ["Ampara"]), None);
        assert_eq!(match_reference("   ", ["Ampara"]), None);
    }

    #[test]
    fn test_reference_table_shape() {
        let service = DistrictService::new();
        assert_eq!(service.districts().count(), 25);
        assert_eq!(service.districts().next(), Some("Ampara"));
        assert!(service
            .entries()
            .iter()
            .all(|(_, divisions)| !divisions.is_empty()));
    }

    #[test]
    fn test_division_membership() {
        let service = DistrictService::new();
        assert!(service.is_valid_division("Colombo", "Dehiwala"));
        assert!(!service.is_valid_division("Gampaha", "Dehiwala"));
        assert!(!service.is_valid_division("Atlantis", "Dehiwala"));
    }

    #[test]
    fn test_canonical_district() {
        let service = DistrictService::new();
        assert_eq!(service.canonical_district("nuwara eliya"), Some("Nuwara Eliya"));
        assert_eq!(service.canonical_district("Nuwara"), None);
    }

    #[test]
    fn test_resolve_district_and_division() {
        let service = DistrictService::new();
        assert_eq!(
            service.resolve(&guess("Colombo District", "Dehiwala-Mount Lavinia")),
            AreaResolution::Matched {
                district: "Colombo",
                ds_division: Some("Dehiwala"),
            }
        );
    }

    #[test]
    fn test_resolve_district_without_division() {
        let service = DistrictService::new();
        assert_eq!(
            service.resolve(&guess("Galle District", "Unawatuna")),
            AreaResolution::Matched {
                district: "Galle",
                ds_division: None,
            }
        );
        assert_eq!(
            service.resolve(&guess("Galle District", "")),
            AreaResolution::Matched {
                district: "Galle",
                ds_division: None,
            }
        );
    }

    #[test]
    fn test_resolve_unmatched_district_keeps_raw_guess() {
        let service = DistrictService::new();
        assert_eq!(
            service.resolve(&guess("Western Province", "Dehiwala")),
            AreaResolution::DistrictNotMatched {
                raw_guess: "Western Province".to_string(),
            }
        );
        assert_eq!(
            service.resolve(&guess("", "Dehiwala")),
            AreaResolution::DistrictNotMatched {
                raw_guess: String::new(),
            }
        );
    }

    #[test]
    fn test_custom_table_order_decides() {
        static TABLE: &[(&str, &[&str])] = &[("Matale", &["Naula"]), ("Matara", &["Weligama"])];
        let service = DistrictService::with_table(TABLE);
        // "mata" is contained in both; the first entry wins
        assert_eq!(
            service.resolve(&guess("Mata", "")),
            AreaResolution::Matched {
                district: "Matale",
                ds_division: None,
            }
        );
    }
}
