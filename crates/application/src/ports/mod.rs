pub mod cache_storage;
pub mod clients;
pub mod network;
pub mod notifications;

pub use cache_storage::{CacheStorage, CacheStore};
pub use clients::ClientRegistry;
pub use network::NetworkGateway;
pub use notifications::NotificationPresenter;
