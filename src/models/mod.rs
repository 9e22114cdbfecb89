pub mod month;
pub mod price_range;
pub mod report;
pub mod sale;

pub use month::*;
pub use price_range::*;
pub use report::*;
pub use sale::*;
