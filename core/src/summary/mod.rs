mod print;
mod sections;

pub use print::print_summary;
pub use sections::{SummarySection, SummarySections, UnknownSection};
