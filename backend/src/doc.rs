//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the guest, invitation and health endpoints with the
//! schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI serves
//! it in debug builds, and the `openapi-dump` binary prints it for tooling.
//! Paths are documented without the optional `/api` prefix.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, GuestBodySchema, GuestPageSchema, GuestPatchSchema,
    GuestSchema, InvitationSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wedding guest API",
        description = "Guest list management and invitation lookup."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL"),
        (url = "/api", description = "Prefix used by the frontend")
    ),
    paths(
        crate::inbound::http::guests::list_guests,
        crate::inbound::http::guests::create_guest,
        crate::inbound::http::guests::get_guest,
        crate::inbound::http::guests::replace_guest,
        crate::inbound::http::guests::patch_guest,
        crate::inbound::http::guests::delete_guest,
        crate::inbound::http::invitations::get_invitation_by_uuid,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        GuestSchema,
        GuestBodySchema,
        GuestPatchSchema,
        GuestPageSchema,
        InvitationSchema
    )),
    tags(
        (name = "guests", description = "Guest list management"),
        (name = "invitations", description = "Public invitation lookup"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("Guest", &["id", "first_name", "last_name"])]
    #[case("GuestPage", &["count", "next", "previous", "results"])]
    #[case("Invitation", &["id", "uuid", "guest_names", "is_plural", "created_at"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/guests/")]
    #[case("/guests/{id}/")]
    #[case("/guests/invitations/by-uuid/{uuid}/")]
    #[case("/health/ready")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
