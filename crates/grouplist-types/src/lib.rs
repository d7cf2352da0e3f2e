pub mod color;
pub mod node;
pub mod record;

pub use color::Rgb;
pub use node::{HeaderNode, NodeKey, PresentationNode, RowNode};
pub use record::{GroupId, Record, RecordId};
