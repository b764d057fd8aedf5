// Domain layer module exports
// The task model is independent of the HTTP surface and the agent runtime

pub mod task;

pub use task::{Task, TaskCatalog, TaskReport};
