pub mod alert;
pub mod forecast;
pub mod observation;
pub mod recommendation;
pub mod report;

pub use alert::*;
pub use forecast::*;
pub use observation::*;
pub use recommendation::*;
pub use report::*;
