pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{ConsoleAlerts, FileStore, LoggingNavigator, MemoryStore};
pub use app::{Handled, Storefront};
pub use domain::model::Screen;
pub use config::StorefrontConfig;
pub use crate::core::{
    account::{AccountStore, LoginForm, RegistrationForm},
    catalog::Catalog,
    enrollment::{EmptyCheckout, EnrollmentEngine},
    pricing::compute_quote,
};
pub use utils::error::{Result, StorefrontError};
