use std::cmp::Ordering;

/// A separator is anything that is neither an ASCII letter nor an ASCII
/// digit, except the special `~` and `^` markers which carry their own
/// ordering. Non-ASCII bytes are separators too, same as rpm's
/// `risalnum()` treats them.
fn is_separator(byte: u8) -> bool {
    ! byte.is_ascii_alphanumeric() && byte != b'~' && byte != b'^'
}

/// Advance the cursor over a maximal run of digits (or letters, when
/// `numeric` is false) and return the consumed run, which is empty if
/// the byte under the cursor is not of the requested kind
fn take_segment<'a>(version: &'a [u8], cursor: &mut usize, numeric: bool)
    -> &'a [u8]
{
    let wanted: fn(&u8) -> bool = if numeric {
        u8::is_ascii_digit
    } else {
        u8::is_ascii_alphabetic
    };
    let start = *cursor;
    while version.get(*cursor).is_some_and(wanted) {
        *cursor += 1
    }
    &version[start..*cursor]
}

fn strip_leading_zeroes(digits: &[u8]) -> &[u8] {
    let mut start = 0;
    while digits.get(start) == Some(&b'0') {
        start += 1
    }
    &digits[start..]
}

/// Compare two all-digit segments as numbers of arbitrary width: after
/// the leading zeroes are gone the longer run is the larger number, and
/// equal-length runs compare bytewise
fn compare_numeric(one: &[u8], two: &[u8]) -> Ordering {
    let one = strip_leading_zeroes(one);
    let two = strip_leading_zeroes(two);
    match one.len().cmp(&two.len()) {
        Ordering::Equal => one.cmp(two),
        order => order,
    }
}

/// Compare two version strings with rpm's `rpmvercmp()` rules: walk
/// both strings left to right, splitting them into maximal all-digit or
/// all-letter segments, and decide on the first segment pair that
/// differs. Digit segments compare as numbers and outrank letter
/// segments at the same position. Separator characters only mark the
/// split points, their kind and count never decide an ordering, so
/// `1.0` and `1_0` compare equal.
///
/// The `~` marker sorts before anything including the end of the
/// string (`1.0~rc1` < `1.0`), the `^` marker sorts after the end of
/// the string but before any ordinary segment (`1.0` < `1.0^git1` <
/// `1.0.1`).
///
/// Total over any two inputs, never fails, never allocates.
pub fn vercmp(first: &str, second: &str) -> Ordering {
    // identical strings need no scan
    if first == second {
        return Ordering::Equal
    }
    let one = first.as_bytes();
    let two = second.as_bytes();
    let mut i = 0;
    let mut j = 0;
    while i < one.len() || j < two.len() {
        while i < one.len() && is_separator(one[i]) {
            i += 1
        }
        while j < two.len() && is_separator(two[j]) {
            j += 1
        }
        let tilde_one = one.get(i) == Some(&b'~');
        let tilde_two = two.get(j) == Some(&b'~');
        if tilde_one || tilde_two {
            if ! tilde_one {
                return Ordering::Greater
            }
            if ! tilde_two {
                return Ordering::Less
            }
            i += 1;
            j += 1;
            continue
        }
        let caret_one = one.get(i) == Some(&b'^');
        let caret_two = two.get(j) == Some(&b'^');
        if caret_one || caret_two {
            if i >= one.len() {
                return Ordering::Less
            }
            if j >= two.len() {
                return Ordering::Greater
            }
            if ! caret_one {
                return Ordering::Greater
            }
            if ! caret_two {
                return Ordering::Less
            }
            i += 1;
            j += 1;
            continue
        }
        if i >= one.len() || j >= two.len() {
            break
        }
        let numeric = one[i].is_ascii_digit();
        let segment_one = take_segment(one, &mut i, numeric);
        let segment_two = take_segment(two, &mut j, numeric);
        // an empty run on the second side means the two segments differ
        // in kind, and a digit segment always outranks a letter segment
        if segment_two.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        let order = if numeric {
            compare_numeric(segment_one, segment_two)
        } else {
            segment_one.cmp(segment_two)
        };
        if order != Ordering::Equal {
            return order
        }
    }
    // all compared segments were equal, whichever version still has a
    // segment left over wins; separator-only leftovers were already
    // consumed above
    if i >= one.len() && j >= two.len() {
        Ordering::Equal
    } else if i >= one.len() {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// The classic C-style entry point: `-1`, `0` or `1` for less, equal,
/// greater, the convention callers rely on for sorting. `vercmp()` is
/// the same comparison with an `Ordering` result.
pub fn rpmvercmp(first: &str, second: &str) -> i32 {
    match vercmp(first, second) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[track_caller]
    fn expect(first: &str, second: &str, expected: i32) {
        assert_eq!(rpmvercmp(first, second), expected,
            "rpmvercmp('{}', '{}')", first, second);
        assert_eq!(rpmvercmp(second, first), -expected,
            "rpmvercmp('{}', '{}')", second, first);
    }

    #[test]
    fn equal_versions() {
        expect("1.0", "1.0", 0);
        expect("2.0.1", "2.0.1", 0);
        expect("5.5p1", "5.5p1", 0);
        expect("20101121", "20101121", 0);
        expect("a", "a", 0);
    }

    #[test]
    fn simple_ordering() {
        expect("1.0", "2.0", -1);
        expect("2.0", "1.0", 1);
        expect("2.0.1", "2.0", 1);
        expect("1.0", "1", 1);
        expect("2.50", "2.5", 1);
        expect("5.5p1", "5.5p2", -1);
        expect("5.5p10", "5.5p1", 1);
        expect("4.999.9", "5.0", -1);
        expect("20101121", "20101122", -1);
        expect("6.9", "10.0", -1);
    }

    #[test]
    fn leading_zeroes_do_not_count() {
        expect("1.01", "1.1", 0);
        expect("10.0001", "10.1", 0);
        expect("10.0001", "10.0039", -1);
        expect("1.0010", "1.9", 1);
        expect("1.00", "1.0", 0);
        expect("00", "0", 0);
    }

    #[test]
    fn separators_only_split() {
        expect("1.0", "1_0", 0);
        expect("2_0", "2.0", 0);
        expect("fc4", "fc.4", 0);
        expect("3.0.0_fc", "3.0.0.fc", 0);
        expect("1.0", "1..0", 0);
        expect(".1.0", "1.0", 0);
        expect("1.0.", "1.0", 0);
        expect("a+", "a_", 0);
        expect("+a", "_a", 0);
        expect("+", "_", 0);
        expect("+_", "_+", 0);
        // non-ASCII bytes split segments just like punctuation
        expect("1\u{e9}0", "1.0", 0);
    }

    #[test]
    fn digits_outrank_letters() {
        expect("1.0a", "1.0.1", -1);
        expect("1a", "1.1", -1);
        expect("2a", "2.0", -1);
        expect("1.0", "1.fc4", 1);
        expect("2.0.1a", "2.0.1", 1);
        expect("10xyz", "10.1xyz", -1);
        expect("xyz10", "xyz10.1", -1);
        expect("5.5p2", "5.6p1", -1);
        expect("5.6p1", "6.5p1", -1);
        expect("10b2", "10a1", 1);
        expect("abd", "abc", 1);
    }

    #[test]
    fn trailing_segment_wins() {
        expect("1.0", "1.0.1", -1);
        // the side with an alpha segment left over is newer, same as
        // rpm's own rpmvercmp() orders it
        expect("1.0", "1.0a", -1);
        expect("abc", "abcd", -1);
        expect("1.5", "1.5.b", -1);
    }

    #[test]
    fn comparison_is_by_raw_byte_value() {
        // no locale collation, uppercase letters order before lowercase
        expect("FC5", "fc4", -1);
        expect("B", "a", -1);
        expect("1.0.A", "1.0.a", -1);
    }

    #[test]
    fn empty_strings() {
        expect("", "", 0);
        expect("", "1", -1);
        expect("1", "", 1);
        expect("", ".", 0);
        expect("", "_", 0);
    }

    #[test]
    fn tilde_sorts_first() {
        expect("1.0~rc1", "1.0~rc1", 0);
        expect("1.0~rc1", "1.0", -1);
        expect("1.0~rc1", "1.0~rc2", -1);
        expect("1.0~rc1~git123", "1.0~rc1", -1);
        expect("1.0~rc1", "1.0arc1", -1);
        // tilde outranks even the end of the string
        expect("~", "", -1);
        expect("~~", "~", -1);
        expect("~1", "~", 1);
    }

    #[test]
    fn caret_sorts_after_base() {
        expect("1.0^", "1.0^", 0);
        expect("1.0^", "1.0", 1);
        expect("1.0^git1", "1.0", 1);
        expect("1.0^git1", "1.0^git2", -1);
        expect("1.0^git1", "1.01", -1);
        expect("1.0^20160101", "1.0.1", -1);
        expect("1.0^git1~pre", "1.0^git1", -1);
        expect("^", "", 1);
    }

    #[test]
    fn ordering_is_transitive_over_corpus() {
        // strictly ascending under the comparison rules, every pair
        // must agree with the corpus order
        let corpus = [
            "~1", "", "0.9", "1.0~beta", "1.0~rc1", "1.0", "1.0^git1",
            "1.0a", "1.0.1", "1.1", "2.0", "10.0",
        ];
        for (i, first) in corpus.iter().enumerate() {
            for second in corpus.iter().skip(i + 1) {
                expect(first, second, -1)
            }
        }
    }

    proptest! {
        #[test]
        fn reflexive(s in "[a-zA-Z0-9._~^+-]{0,24}") {
            prop_assert_eq!(rpmvercmp(&s, &s), 0)
        }

        #[test]
        fn antisymmetric(
            a in "[a-zA-Z0-9._~^+-]{0,24}",
            b in "[a-zA-Z0-9._~^+-]{0,24}",
        ) {
            prop_assert_eq!(rpmvercmp(&a, &b), -rpmvercmp(&b, &a))
        }

        #[test]
        fn separators_are_interchangeable(a in "[a-zA-Z0-9._~]{0,24}") {
            let b = a.replace('.', "_");
            prop_assert_eq!(rpmvercmp(&a, &b), 0)
        }
    }
}
