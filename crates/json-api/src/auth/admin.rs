//! Administrator gate.

use salvo::prelude::*;

use crate::extensions::*;

/// Reject callers that are not administrators. Must run after the auth
/// middleware.
#[salvo::handler]
pub(crate) async fn require_admin(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if let Err(error) = depot.admin_or_403() {
        res.render(error);
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use crate::test_helpers::{Mocks, TEST_ADMIN, TEST_USER, service_as};

    use super::*;

    #[salvo::handler]
    async fn ok() -> &'static str {
        "ok"
    }

    fn make_service(principal: lunchline_app::auth::Principal) -> Service {
        service_as(
            Mocks::default(),
            principal,
            Router::with_path("admin").hoop(require_admin).get(ok),
        )
    }

    #[tokio::test]
    async fn test_admin_passes() -> TestResult {
        let res = TestClient::get("http://example.com/admin")
            .send(&make_service(TEST_ADMIN))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_regular_user_gets_403() -> TestResult {
        let res = TestClient::get("http://example.com/admin")
            .send(&make_service(TEST_USER))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
