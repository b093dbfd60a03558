//! CSV ingestion of uniformly sampled time series

pub mod reader;
pub mod series;

pub use reader::{read_series, read_series_from_reader, read_series_with, HeaderMode, ReadOptions};
pub use series::SampleSeries;
