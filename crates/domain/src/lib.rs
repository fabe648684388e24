#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod draft;
mod error;
mod profile;
mod progress;
mod service;
mod session;
mod settings;
mod timer;
mod training;

pub use catalog::*;
pub use draft::*;
pub use error::*;
pub use profile::*;
pub use progress::*;
pub use service::*;
pub use session::*;
pub use settings::*;
pub use timer::*;
pub use training::*;
