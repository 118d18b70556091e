//! Route table for the HTTP adapter.
//!
//! Guest routes are served both at the root and under `/api`. Within the
//! `/guests` scope a missing trailing slash is appended before matching, so
//! `/guests/7` and `/guests/7/` reach the same handler.

use actix_web::dev::HttpServiceFactory;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web;

use crate::inbound::http::error::{json_config, path_config};
use crate::inbound::http::guests::{
    create_guest, delete_guest, get_guest, list_guests, patch_guest, replace_guest,
};
use crate::inbound::http::health::{live, ready};
use crate::inbound::http::invitations::get_invitation_by_uuid;

/// Prefix under which the guest routes are mounted a second time.
pub const API_PREFIX: &str = "/api";

fn guests_scope() -> impl HttpServiceFactory + 'static {
    web::scope("/guests")
        .wrap(NormalizePath::new(TrailingSlash::Always))
        .service(get_invitation_by_uuid)
        .service(list_guests)
        .service(create_guest)
        .service(get_guest)
        .service(replace_guest)
        .service(patch_guest)
        .service(delete_guest)
}

/// Register every endpoint plus the extractor configuration they rely on.
///
/// Handlers expect `web::Data<HttpState>`; probes expect
/// `web::Data<HealthState>` when mounted.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use wedding_backend::inbound::http::routes::configure;
///
/// let app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(ready)
        .service(live)
        .service(web::scope(API_PREFIX).service(guests_scope()))
        .service(guests_scope());
}

#[cfg(test)]
mod tests {
    use crate::domain::ports::{MockGuestsCommand, MockGuestsQuery};
    use crate::inbound::http::test_utils::{state_with, test_app};
    use actix_web::{http::StatusCode, test as actix_test};
    use pagination::{PageRequest, Paged};
    use rstest::rstest;

    fn empty_listing() -> MockGuestsQuery {
        let mut query = MockGuestsQuery::new();
        query.expect_list_guests().returning(|request: PageRequest| {
            let window = request.window(0).map_err(|_| {
                crate::domain::Error::internal("empty window always resolves")
            })?;
            Ok(Paged::new(Vec::new(), 0, window))
        });
        query
    }

    #[rstest]
    #[case("/guests/")]
    #[case("/guests")]
    #[case("/api/guests/")]
    #[case("/api/guests")]
    #[actix_web::test]
    async fn guest_list_is_reachable_with_and_without_prefix(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(state_with(
            empty_listing(),
            MockGuestsCommand::new(),
        )))
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[rstest]
    #[case("/guests/abc/")]
    #[case("/guests/99999999999999999999999/")]
    #[case("/nowhere/")]
    #[actix_web::test]
    async fn unmatched_paths_return_json_not_found(#[case] uri: &str) {
        let app = actix_test::init_service(test_app(state_with(
            MockGuestsQuery::new(),
            MockGuestsCommand::new(),
        )))
        .await;
        let res =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request())
                .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = actix_test::read_body_json(res).await;
        assert_eq!(body["code"], "not_found");
    }
}
