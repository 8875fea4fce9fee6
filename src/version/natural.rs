//! Numeric-aware, case-insensitive string ordering
//!
//! Names are split into runs of ASCII digits and runs of everything else.
//! Digit runs compare by value, so "v10" sorts after "v9"; other runs compare
//! case-insensitively.
//!
//! Text runs are ordered by lowercased code point, not by a locale collation.
//! Names built from digits, `.` and letters order the same way a locale-aware
//! numeric collation would. Other punctuation and accented letters can land
//! elsewhere: "1.0_1" sorts after "1.0.1" and "-1" after "1".

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Digits(&'a str),
    Text(&'a str),
}

impl Segment<'_> {
    fn cmp_with(&self, other: &Segment<'_>) -> Ordering {
        match (self, other) {
            (Segment::Digits(a), Segment::Digits(b)) => cmp_digits(a, b),
            (Segment::Text(a), Segment::Text(b)) => cmp_text(a, b),
            (Segment::Digits(_), Segment::Text(_)) => Ordering::Less,
            (Segment::Text(_), Segment::Digits(_)) => Ordering::Greater,
        }
    }
}

/// Iterator over alternating digit / non-digit runs of a string
struct Segments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());

        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(if digits {
            Segment::Digits(run)
        } else {
            Segment::Text(run)
        })
    }
}

fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

/// Compare two digit runs by numeric value without parsing, so runs of any
/// length work.
fn cmp_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn cmp_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compare two version names with numeric awareness and case folding.
///
/// Equal under this ordering does not imply equal strings: "V1" and "v1",
/// or "1.01" and "1.1", compare as `Equal`.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = segments(a);
    let mut right = segments(b);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match l.cmp_with(&r) {
                Ordering::Equal => continue,
                unequal => return unequal,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("v10", "v9", Ordering::Greater)]
    #[case("1.10", "1.9", Ordering::Greater)]
    #[case("1.2", "1.10", Ordering::Less)]
    #[case("2.0", "10.0", Ordering::Less)]
    #[case("0.5.0", "0.5.0", Ordering::Equal)]
    #[case("V1", "v1", Ordering::Equal)] // case-insensitive
    #[case("1.01", "1.1", Ordering::Equal)] // leading zeros ignored
    #[case("1.0", "1.0.1", Ordering::Less)] // prefix sorts first
    #[case("1.0-rc1", "1.0-rc2", Ordering::Less)]
    #[case("1a", "1.", Ordering::Greater)] // text runs compare by character
    #[case("1", "a", Ordering::Less)] // digits before text
    #[case("", "1", Ordering::Less)]
    #[case("1.0_1", "1.0.1", Ordering::Greater)] // code point order for punctuation
    #[case("-1", "1", Ordering::Greater)]
    #[case("", "", Ordering::Equal)]
    fn natural_cmp_returns_expected(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(natural_cmp(a, b), expected);
        assert_eq!(natural_cmp(b, a), expected.reverse());
    }

    #[test]
    fn natural_cmp_handles_digit_runs_longer_than_u64() {
        let big = "1.123456789012345678901234567890";
        let bigger = "1.123456789012345678901234567891";
        assert_eq!(natural_cmp(big, bigger), Ordering::Less);
    }

    #[test]
    fn segments_split_alternating_runs() {
        let runs: Vec<_> = segments("v1.10-rc2").collect();
        assert_eq!(
            runs,
            vec![
                Segment::Text("v"),
                Segment::Digits("1"),
                Segment::Text("."),
                Segment::Digits("10"),
                Segment::Text("-rc"),
                Segment::Digits("2"),
            ]
        );
    }

    #[test]
    fn sorting_with_natural_cmp_orders_versions_numerically() {
        let mut names = vec!["1.9", "1.10", "1.2", "0.12.0", "1.1"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["0.12.0", "1.1", "1.2", "1.9", "1.10"]);
    }
}
