use super::{Segment, SegmentData, SegmentId};
use crate::core::Estimate;
use crate::utils::CurrencyFormatter;

pub struct AnnualCostSegment<'a> {
    formatter: &'a dyn CurrencyFormatter,
}

impl<'a> AnnualCostSegment<'a> {
    pub fn new(formatter: &'a dyn CurrencyFormatter) -> Self {
        Self { formatter }
    }
}

impl Segment for AnnualCostSegment<'_> {
    fn collect(&self, estimate: &Estimate) -> Option<SegmentData> {
        if !estimate.is_applicable() {
            return None;
        }

        Some(SegmentData {
            primary: self.formatter.format(estimate.annual_cost),
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::AnnualCost
    }
}
