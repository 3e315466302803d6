pub mod node;
pub mod renderer;
pub mod stream;
pub mod traits;

pub use node::*;
pub use renderer::*;
pub use stream::*;
pub use traits::*;
