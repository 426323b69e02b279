// HTTP handlers, one module per route group

pub mod system;
pub mod teams;
pub mod users;
