//! Sitewatch engine: persistence, HTTP probing and the sweep scheduler.
mod persist;
mod probe;
mod scheduler;
mod store;

pub use persist::{write_atomic, PersistError};
pub use probe::{ProbeSettings, Prober, ReqwestProber};
pub use scheduler::{run_scheduler, sweep, Notifier, NotifyError};
pub use store::SiteStore;
