//! UI components for the portfolio page.

mod contact;
mod footer;
mod header;
mod sections;

pub use contact::*;
pub use footer::*;
pub use header::*;
pub use sections::*;
