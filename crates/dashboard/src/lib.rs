// Module declarations
pub mod config;
pub mod logging;
pub mod page;
pub mod source;
pub mod toast;

// Re-export commonly used types
pub use config::Config;
pub use page::{Layout, ProfilePage};
pub use toast::ConsoleNotifier;
