pub mod clients;
pub mod notifications;

pub use clients::TracingClientRegistry;
pub use notifications::TracingNotificationPresenter;
