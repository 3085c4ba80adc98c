pub mod report;

pub use report::TimeDisplay;
