pub mod checkin;
pub mod coordinate;
pub mod planned;
pub mod share;
pub mod visibility;

pub use checkin::{CheckIn, CheckInOptions, EventRef};
pub use coordinate::{GeoCoordinate, distance_km};
pub use planned::{PlannedEvent, PlannedEventDraft, PlannedSource};
pub use share::{SharePayload, ShareTarget};
pub use visibility::Visibility;
