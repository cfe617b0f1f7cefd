pub mod batch;
pub mod homoglyph;
pub mod seat_parser;
