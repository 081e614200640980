//! Parish announcements (avisos) published as a spreadsheet CSV.

pub mod client;
pub mod error;
pub mod parse;

pub use client::SheetClient;
pub use error::AvisosError;
pub use parse::{parse_announcements, Announcement};
