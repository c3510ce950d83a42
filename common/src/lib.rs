//! Portfolio Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される型・ストア・カルーセル状態機械

pub mod types;
pub mod config;
pub mod error;
pub mod store;
pub mod carousel;
pub mod view;
pub mod reveal;

pub use types::ProjectRecord;
pub use config::GalleryConfig;
pub use error::{Error, Result};
pub use store::ProjectStore;
pub use carousel::{AutoplayTimer, Key, ManualTimer, SwipeOutcome, ViewerController, ViewerState};
pub use view::{CardView, ViewerView};
pub use reveal::{RevealDecision, RevealTracker};
