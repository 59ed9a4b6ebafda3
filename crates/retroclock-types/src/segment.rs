use serde::{Deserialize, Serialize};

/// Segments of a seven-segment digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// top
    A,
    /// top-right
    B,
    /// bottom-right
    C,
    /// bottom
    D,
    /// bottom-left
    E,
    /// top-left
    F,
    /// middle
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Segment::A | Segment::D | Segment::G)
    }
}

/// On/off state of the seven segments, ordered A through G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentPattern([bool; 7]);

impl SegmentPattern {
    pub const fn new(segments: [bool; 7]) -> Self {
        Self(segments)
    }

    pub fn is_on(&self, segment: Segment) -> bool {
        self.0[segment.index()]
    }

    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|on| **on).count()
    }

    pub fn as_array(&self) -> [bool; 7] {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_order_matches_indices() {
        for (i, segment) in Segment::ALL.iter().enumerate() {
            assert_eq!(segment.index(), i);
        }
    }

    #[test]
    fn test_pattern_lookup_by_segment() {
        let pattern = SegmentPattern::new([false, true, true, false, false, false, false]);
        assert!(pattern.is_on(Segment::B));
        assert!(pattern.is_on(Segment::C));
        assert!(!pattern.is_on(Segment::G));
        assert_eq!(pattern.lit_count(), 2);
    }
}
