//! Domain types and error taxonomy shared by the topic store, the view
//! controller and the presentation shell.

pub mod domain;
pub mod error;
