// Page layout signals derived from host measurements.
// The host owns observation (render passes, resize); this module only computes.

pub mod page_fit;

pub use page_fit::{estimate_page_fit, FillLevel, PageFit, PageMeasurement, A4_HEIGHT_PX};
