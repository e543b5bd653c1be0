pub mod chat;
pub mod file_guard;
pub mod scan;
pub mod shared;

pub use chat::ChatView;
pub use file_guard::FileGuardInput;
pub use scan::ScanView;
