//! Scene graph
//!
//! - Node: named scene node with parent/child links
//! - Transform: position, Euler rotation, scale
//! - Scene: node container with lookup by name

pub mod node;
pub mod scene;
pub mod transform;

pub use node::Node;
pub use scene::{NodeBuilder, Scene, SharedScene};
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
