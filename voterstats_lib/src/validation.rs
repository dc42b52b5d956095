use crate::error::VoterStatsError;
use crate::florida::CountySortKey;
use crate::national::NationalDimension;

pub const MAX_QUERY_LENGTH: usize = 100;

/// Validate a county filter: enforce length, strip control chars, trim.
///
/// Unlike most inputs an empty query is valid and means "no filter".
pub fn validate_query(input: &str) -> Result<String, VoterStatsError> {
    if input.len() > MAX_QUERY_LENGTH {
        return Err(VoterStatsError::InvalidInput(format!(
            "query exceeds maximum length of {} bytes",
            MAX_QUERY_LENGTH
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

/// Validate a ranking sort key; accepts camelCase, kebab-case or snake_case.
pub fn validate_sort_key(input: &str) -> Result<CountySortKey, VoterStatsError> {
    input.parse().map_err(|_| {
        let valid: Vec<&str> = CountySortKey::ALL.iter().map(|k| k.as_str()).collect();
        VoterStatsError::InvalidInput(format!(
            "unknown sort key '{}'. Valid values: {}",
            input,
            valid.join(", ")
        ))
    })
}

pub fn validate_dimension(input: &str) -> Result<NationalDimension, VoterStatsError> {
    input.parse().map_err(|_| {
        VoterStatsError::InvalidInput(format!(
            "unknown dimension '{}'. Valid values: gender, age",
            input
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trimmed() {
        assert_eq!(validate_query("  St. ").unwrap(), "St.");
    }

    #[test]
    fn query_empty_allowed() {
        assert_eq!(validate_query("").unwrap(), "");
        assert_eq!(validate_query("   ").unwrap(), "");
    }

    #[test]
    fn query_control_chars_stripped() {
        assert_eq!(validate_query("Mia\u{0}mi\t").unwrap(), "Miami");
    }

    #[test]
    fn query_too_long() {
        let long = "a".repeat(MAX_QUERY_LENGTH + 1);
        assert!(matches!(
            validate_query(&long),
            Err(VoterStatsError::InvalidInput(_))
        ));
    }

    #[test]
    fn sort_key_variants() {
        assert_eq!(validate_sort_key("repShare").unwrap(), CountySortKey::RepShare);
        assert_eq!(validate_sort_key("dem-share").unwrap(), CountySortKey::DemShare);
        assert_eq!(validate_sort_key("NPA").unwrap(), CountySortKey::Npa);
    }

    #[test]
    fn sort_key_invalid_lists_choices() {
        let err = validate_sort_key("minorShare").unwrap_err();
        assert!(err.to_string().contains("repShare"));
    }

    #[test]
    fn dimension_valid_and_invalid() {
        assert_eq!(validate_dimension(" Age ").unwrap(), NationalDimension::Age);
        assert!(validate_dimension("income").is_err());
    }
}
