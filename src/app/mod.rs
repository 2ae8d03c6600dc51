// Application layer: user-facing extras built on top of a finished run.

pub mod shell;
