pub mod screens;
pub mod storefront;

pub use screens::route;
pub use storefront::{CourseView, FeeLine, FeesView, Handled, Storefront};
