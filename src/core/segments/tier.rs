use super::{Segment, SegmentData, SegmentId};
use crate::core::Estimate;

#[derive(Default)]
pub struct TierSegment;

impl TierSegment {
    pub fn new() -> Self {
        Self
    }
}

impl Segment for TierSegment {
    fn collect(&self, estimate: &Estimate) -> Option<SegmentData> {
        if !estimate.is_applicable() {
            return None;
        }

        Some(SegmentData {
            primary: estimate.tier_label.clone(),
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::Tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_segment() {
        let estimate = Estimate::from_quantity(3_000.0).unwrap();
        let data = TierSegment::new().collect(&estimate).unwrap();
        assert_eq!(data.primary, "Tier D");
    }

    #[test]
    fn test_tier_segment_hidden_without_usage() {
        let estimate = Estimate::from_quantity(0.0).unwrap();
        assert!(TierSegment::new().collect(&estimate).is_none());
    }
}
