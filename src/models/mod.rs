pub mod booking;
pub mod quote;
pub mod room;
pub mod sheet_config;

pub use booking::{BookingRequest, ConfirmationResult};
pub use quote::{PriceOrigin, PriceQuote, ResolvedPrice, format_currency};
pub use room::{ROOM_CATALOG, RoomType, find_room};
pub use sheet_config::SheetConfig;
