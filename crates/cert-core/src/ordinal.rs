//! Ordinal year parsing ("3rd" -> "3" + "rd")

/// A year entry split into its digits and its ordinal suffix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ordinal {
    /// All ASCII digits of the input, in order
    pub number: String,
    /// Every remaining character, in order
    pub suffix: String,
}

/// Split a year entry into its numeric part and its ordinal suffix
///
/// Only ASCII `0`-`9` count as digits; other Unicode digits such as `"٣"`
/// or `"³"` end up in the suffix. Either part may be empty: `"Final"` has
/// no number and `"4"` has no suffix.
pub fn split_ordinal(year: &str) -> Ordinal {
    let (number, suffix): (String, String) = year.chars().partition(|c| c.is_ascii_digit());
    Ordinal { number, suffix }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(year: &str) -> (String, String) {
        let ordinal = split_ordinal(year);
        (ordinal.number, ordinal.suffix)
    }

    #[test]
    fn test_split_listed_years() {
        assert_eq!(split("1st"), ("1".to_string(), "st".to_string()));
        assert_eq!(split("2nd"), ("2".to_string(), "nd".to_string()));
        assert_eq!(split("3rd"), ("3".to_string(), "rd".to_string()));
        assert_eq!(split("4th"), ("4".to_string(), "th".to_string()));
    }

    #[test]
    fn test_split_multi_digit() {
        assert_eq!(split("21st"), ("21".to_string(), "st".to_string()));
    }

    #[test]
    fn test_split_without_digits() {
        assert_eq!(split("Final"), (String::new(), "Final".to_string()));
    }

    #[test]
    fn test_split_without_suffix() {
        assert_eq!(split("4"), ("4".to_string(), String::new()));
    }

    #[test]
    fn test_split_empty() {
        assert_eq!(split_ordinal(""), Ordinal::default());
    }

    #[test]
    fn test_split_non_ascii_digits_are_suffix() {
        assert_eq!(split("2³rd"), ("2".to_string(), "³rd".to_string()));
    }
}
