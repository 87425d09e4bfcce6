pub mod annual;
pub mod monthly;
pub mod tier;

use crate::core::Estimate;
use crate::utils::CurrencyFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    Tier,
    MonthlyCost,
    AnnualCost,
}

impl SegmentId {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentId::Tier => "Your price tier",
            SegmentId::MonthlyCost => "Estimated monthly cost",
            SegmentId::AnnualCost => "Estimated annual cost",
        }
    }
}

/// One metric panel ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentData {
    pub primary: String,
}

pub trait Segment {
    fn collect(&self, estimate: &Estimate) -> Option<SegmentData>;
    fn id(&self) -> SegmentId;
}

// Re-export all segment types
pub use annual::AnnualCostSegment;
pub use monthly::MonthlyCostSegment;
pub use tier::TierSegment;

/// Collect the metric panels for an estimate, in display order
pub fn collect_all_segments<'a>(
    estimate: &Estimate,
    formatter: &'a dyn CurrencyFormatter,
) -> Vec<(SegmentId, SegmentData)> {
    let segments: Vec<Box<dyn Segment + 'a>> = vec![
        Box::new(TierSegment::new()),
        Box::new(MonthlyCostSegment::new(formatter)),
        Box::new(AnnualCostSegment::new(formatter)),
    ];

    segments
        .iter()
        .filter_map(|segment| segment.collect(estimate).map(|data| (segment.id(), data)))
        .collect()
}
