// Application layer: front-end logic built on top of the core converter.

pub mod session;
