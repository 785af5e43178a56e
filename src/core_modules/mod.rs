pub mod canvas;
pub mod error;
pub mod region;
pub mod region_detector;
pub mod renderer;
pub mod report;
