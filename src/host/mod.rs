//! Host contracts: collaborator traits, step scheduling and the run loop

pub mod frame;
pub mod run;
pub mod scheduler;
pub mod traits;

pub use frame::FrameLimiter;
pub use run::run_loop;
pub use scheduler::StepScheduler;
pub use traits::{Event, InputSource, Renderer, SpriteHandle};
