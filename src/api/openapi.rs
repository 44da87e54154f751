//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, bookings, catalog, health, images, properties, reviews, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rental API",
        version = "1.0.0",
        description = "Property rental marketplace REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::register,
        auth::login,
        auth::me,
        // Users
        users::list_users,
        users::get_user,
        users::assign_role,
        users::remove_role,
        // Properties
        properties::list_properties,
        properties::get_property,
        properties::create_property,
        properties::update_property,
        properties::delete_property,
        properties::list_property_amenities,
        properties::attach_amenity,
        properties::detach_amenity,
        // Images
        images::list_images,
        images::add_image,
        images::update_image,
        images::delete_image,
        // Catalog
        catalog::list_property_types,
        catalog::create_property_type,
        catalog::delete_property_type,
        catalog::list_amenities,
        catalog::create_amenity,
        // Bookings
        bookings::list_bookings,
        bookings::quote_booking,
        bookings::create_booking,
        bookings::get_booking,
        bookings::update_booking,
        bookings::delete_booking,
        // Reviews
        reviews::list_reviews,
        reviews::get_review,
        reviews::list_property_reviews,
        reviews::create_review,
        reviews::update_review,
        reviews::delete_review,
    ),
    components(
        schemas(
            // Auth
            auth::AuthResponse,
            crate::models::user::RegisterRequest,
            crate::models::user::LoginRequest,
            crate::models::user::User,
            crate::models::user::Role,
            crate::models::user::AssignRole,
            // Properties
            crate::models::property::Property,
            crate::models::property::PropertyShort,
            crate::models::property::CreateProperty,
            crate::models::property::UpdateProperty,
            crate::models::image::Image,
            crate::models::image::CreateImage,
            crate::models::image::UpdateImage,
            // Catalog
            crate::models::amenity::Amenity,
            crate::models::amenity::PropertyAmenity,
            crate::models::amenity::CreateAmenity,
            crate::models::amenity::AttachAmenity,
            crate::models::amenity::PropertyType,
            crate::models::amenity::CreatePropertyType,
            // Bookings
            crate::models::booking::Booking,
            crate::models::booking::BookingDetails,
            crate::models::booking::BookingStatus,
            crate::models::booking::CreateBooking,
            crate::models::booking::UpdateBooking,
            crate::pricing::BookingQuote,
            // Reviews
            crate::models::review::Review,
            crate::models::review::CreateReview,
            crate::models::review::UpdateReview,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "User and role administration"),
        (name = "properties", description = "Property listings"),
        (name = "images", description = "Property images"),
        (name = "catalog", description = "Property types and amenities"),
        (name = "bookings", description = "Bookings and price quotes"),
        (name = "reviews", description = "Property reviews")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by protected paths
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_documents_booking_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/bookings"));
        assert!(doc.paths.paths.contains_key("/bookings/quote"));
        assert!(doc.paths.paths.contains_key("/properties/{id}/reviews"));
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
