pub mod dispatcher;

pub use dispatcher::{Command, CommandDispatcher, DispatchError};
