pub mod account;
pub mod catalog;
pub mod enrollment;
pub mod pricing;

pub use crate::domain::model::{Account, Course, CourseDetails, CourseGroup, Money, Quote, Receipt};
pub use crate::domain::ports::{AlertSurface, KeyValueStore, Navigator};
pub use crate::utils::error::Result;
