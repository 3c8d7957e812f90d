pub mod activate;
pub mod fetch;
pub mod install;
pub mod notification_click;
pub mod push;
pub mod sync;

pub use activate::ActivateUseCase;
pub use fetch::{FetchOutcome, HandleFetchUseCase, ServedFrom};
pub use install::InstallShellUseCase;
pub use notification_click::NotificationClickUseCase;
pub use push::ShowPushNotificationUseCase;
pub use sync::SyncDocumentsUseCase;
