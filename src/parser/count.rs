/// Best-effort report count from a table cell or row.
///
/// Thousands separators are dropped and every digit in the text is concatenated, so "1,234 reports" is 1234.
/// Text without any digit has no count, which is different from a count of zero.
pub fn parse_count(text: &str) -> Option<u64> {
    let digits = text.replace(',', "").chars().filter(char::is_ascii_digit).collect::<String>();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1,234 reports", Some(1234))]
    #[case("42", Some(42))]
    #[case("  7\n", Some(7))]
    #[case("0", Some(0))]
    #[case("12 of 34", Some(1234))]
    #[case("no data", None)]
    #[case("", None)]
    #[case("99999999999999999999999", None)]
    fn parse_count_concatenates_digit_runs(#[case] text: &str, #[case] expected: Option<u64>) {
        assert_eq!(parse_count(text), expected);
    }
}
