//! Output rendering

pub mod person;

pub use person::{render_person, write_person};
