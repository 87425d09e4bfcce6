pub mod breakdown;
pub mod estimate;
pub mod report;
pub mod segments;

pub use breakdown::{build_breakdown, BreakdownRow};
pub use estimate::Estimate;
pub use report::ReportGenerator;
pub use segments::{collect_all_segments, Segment, SegmentData, SegmentId};
