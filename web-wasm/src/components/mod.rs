//! UIコンポーネント

pub mod project_card;
pub mod project_viewer;
