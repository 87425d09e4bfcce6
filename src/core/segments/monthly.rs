use super::{Segment, SegmentData, SegmentId};
use crate::core::Estimate;
use crate::utils::CurrencyFormatter;

pub struct MonthlyCostSegment<'a> {
    formatter: &'a dyn CurrencyFormatter,
}

impl<'a> MonthlyCostSegment<'a> {
    pub fn new(formatter: &'a dyn CurrencyFormatter) -> Self {
        Self { formatter }
    }
}

impl Segment for MonthlyCostSegment<'_> {
    fn collect(&self, estimate: &Estimate) -> Option<SegmentData> {
        if !estimate.is_applicable() {
            return None;
        }

        Some(SegmentData {
            primary: self.formatter.format(estimate.monthly_cost),
        })
    }

    fn id(&self) -> SegmentId {
        SegmentId::MonthlyCost
    }
}
