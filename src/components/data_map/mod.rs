mod component;
mod config;
mod download;
mod editor;
mod error;
mod export;
mod graph;
mod interaction;
mod render;
mod state;
mod transform;
mod types;

pub use component::DataMapCanvas;
pub use config::EditorConfig;
pub use download::download_svg;
pub use graph::GraphModel;
pub use interaction::GestureEnd;
pub use state::EditorSession;
pub use types::{Connection, Node, NodeId};
