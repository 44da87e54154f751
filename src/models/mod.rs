//! Data models for the rental marketplace

pub mod amenity;
pub mod booking;
pub mod image;
pub mod property;
pub mod review;
pub mod user;

// Re-export commonly used types
pub use amenity::{Amenity, PropertyAmenity, PropertyType};
pub use booking::{Booking, BookingDetails, BookingStatus};
pub use image::Image;
pub use property::{Property, PropertyShort};
pub use review::Review;
pub use user::{Role, User, UserClaims};
