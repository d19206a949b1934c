mod input;
mod physics;
mod renderer;
mod timing;

pub use input::{InputCommand, InputSystem};
pub use physics::PhysicsSystem;
pub use renderer::Renderer;
pub use timing::TimeSystem;
