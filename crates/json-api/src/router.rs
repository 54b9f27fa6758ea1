//! App Router

use salvo::Router;

use crate::{
    auth::{self, admin::require_admin},
    cart, configuration, dishes, orders, promotions,
};

/// Every authenticated route. Administrator-only routes sit behind
/// [`require_admin`].
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("cart")
                .get(cart::get::handler)
                .post(cart::save::handler)
                .delete(cart::clear::handler),
        )
        .push(
            Router::with_path("orders")
                .get(orders::index::handler)
                .post(orders::create::handler)
                .push(Router::with_path("subvention").get(orders::subvention::handler))
                .push(
                    Router::with_path("{order}")
                        .get(orders::get::handler)
                        .delete(orders::delete::handler)
                        .push(
                            Router::with_path("lines")
                                .post(orders::lines::create::handler)
                                .push(
                                    Router::with_path("{line}")
                                        .patch(orders::lines::update::handler)
                                        .delete(orders::lines::delete::handler),
                                ),
                        ),
                ),
        )
        .push(
            Router::with_path("configuration")
                .hoop(require_admin)
                .get(configuration::get::handler)
                .patch(configuration::update::handler),
        )
        .push(
            Router::with_path("dishes")
                .push(Router::with_hoop(require_admin).post(dishes::create::handler))
                .push(
                    Router::with_path("{dish}")
                        .get(dishes::get::handler)
                        .push(Router::with_hoop(require_admin).put(dishes::update::handler)),
                ),
        )
        .push(
            Router::with_path("promotions")
                .hoop(require_admin)
                .post(promotions::create::handler)
                .push(Router::with_path("{promotion}").delete(promotions::delete::handler)),
        )
}
