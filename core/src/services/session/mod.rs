//! Session binding for realtime connections.

mod binder;

pub use binder::SessionBinder;
