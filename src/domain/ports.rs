use crate::domain::model::Screen;
use crate::utils::error::Result;

/// Asynchronous text store keyed by well-known names.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, target: Screen);
}

pub trait AlertSurface: Send + Sync {
    fn alert(&self, title: &str, message: &str);
}
