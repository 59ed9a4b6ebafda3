use retroclock_types::{DigitValue, SegmentPattern};

const ON: bool = true;
const OFF: bool = false;

/// Segment patterns for 0-9, segments ordered A (top) through G (middle).
pub const SEGMENT_TABLE: [SegmentPattern; 10] = [
    SegmentPattern::new([ON, ON, ON, ON, ON, ON, OFF]),     // 0
    SegmentPattern::new([OFF, ON, ON, OFF, OFF, OFF, OFF]), // 1
    SegmentPattern::new([ON, ON, OFF, ON, ON, OFF, ON]),    // 2
    SegmentPattern::new([ON, ON, ON, ON, OFF, OFF, ON]),    // 3
    SegmentPattern::new([OFF, ON, ON, OFF, OFF, ON, ON]),   // 4
    SegmentPattern::new([ON, OFF, ON, ON, OFF, ON, ON]),    // 5
    SegmentPattern::new([ON, OFF, ON, ON, ON, ON, ON]),     // 6
    SegmentPattern::new([ON, ON, ON, OFF, OFF, OFF, OFF]),  // 7
    SegmentPattern::new([ON, ON, ON, ON, ON, ON, ON]),      // 8
    SegmentPattern::new([ON, ON, ON, ON, OFF, ON, ON]),     // 9
];

/// Pattern for `value mod 10`. Total over all integers.
pub fn segment_pattern(value: i64) -> SegmentPattern {
    SEGMENT_TABLE[value.rem_euclid(10) as usize]
}

pub fn digit_pattern(digit: DigitValue) -> SegmentPattern {
    SEGMENT_TABLE[digit.get() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use retroclock_types::Segment;

    #[test]
    fn test_table_has_ten_entries() {
        assert_eq!(SEGMENT_TABLE.len(), 10);
    }

    #[test]
    fn test_zero_is_everything_but_middle() {
        let zero = segment_pattern(0);
        for segment in Segment::ALL {
            assert_eq!(zero.is_on(segment), segment != Segment::G);
        }
    }

    #[test]
    fn test_one_is_right_verticals_only() {
        let one = segment_pattern(1);
        let lit: Vec<_> = Segment::ALL
            .into_iter()
            .filter(|s| one.is_on(*s))
            .collect();
        assert_eq!(lit, vec![Segment::B, Segment::C]);
    }

    #[test]
    fn test_lookup_reduces_modulo_ten() {
        for v in -25i64..=125 {
            assert_eq!(segment_pattern(v), segment_pattern(v.rem_euclid(10)));
        }
        assert_eq!(segment_pattern(i64::MAX), segment_pattern(7));
    }

    #[test]
    fn test_lit_counts_match_classic_display() {
        let counts: Vec<_> = SEGMENT_TABLE.iter().map(|p| p.lit_count()).collect();
        assert_eq!(counts, vec![6, 2, 5, 5, 4, 5, 6, 3, 7, 6]);
    }

    #[test]
    fn test_table_snapshot() {
        let rows: Vec<String> = SEGMENT_TABLE
            .iter()
            .enumerate()
            .map(|(digit, pattern)| {
                let bits: String = pattern
                    .as_array()
                    .iter()
                    .map(|on| if *on { '1' } else { '0' })
                    .collect();
                format!("{digit}: {bits}")
            })
            .collect();

        insta::assert_snapshot!(rows.join("\n"), @r"
        0: 1111110
        1: 0110000
        2: 1101101
        3: 1111001
        4: 0110011
        5: 1011011
        6: 1011111
        7: 1110000
        8: 1111111
        9: 1111011
        ");
    }
}
