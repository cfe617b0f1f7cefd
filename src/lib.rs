pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use models::SeatRecord;
pub use services::homoglyph::fold_homoglyphs;
pub use services::seat_parser::parse_seat;
