pub mod seat;

pub use seat::SeatRecord;
