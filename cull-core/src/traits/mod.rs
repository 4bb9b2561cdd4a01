pub mod anchor;
pub mod catalog;
pub mod notify;
pub mod probe;
pub mod refresh;
pub mod subject;

pub use anchor::IAnchorStore;
pub use catalog::ICatalogClient;
pub use notify::{IMailer, INotifier};
pub use probe::IDiskProbe;
pub use refresh::IRefreshTrigger;
pub use subject::IRetentionSubject;
