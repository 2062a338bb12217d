pub mod arrival;
pub mod booking;

pub use arrival::ArrivalTimeTicker;
pub use booking::confirm;
