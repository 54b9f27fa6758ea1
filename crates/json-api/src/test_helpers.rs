//! Test helpers.

use std::sync::Arc;

use lunchline_app::{
    auth::{MockAuthService, Principal},
    context::AppContext,
    domain::{
        carts::MockCartsService, configuration::MockConfigurationService,
        dishes::MockDishesService, orders::MockOrdersService,
        promotions::MockPromotionsService, users::records::UserUuid,
    },
};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_USER: Principal = Principal {
    user_uuid: UserUuid::from_uuid(Uuid::from_u128(1)),
    is_admin: false,
};

pub(crate) const TEST_ADMIN: Principal = Principal {
    user_uuid: UserUuid::from_uuid(Uuid::from_u128(2)),
    is_admin: true,
};

/// Service mocks backing a test [`State`]. Mocks without expectations fail
/// the test if they are called.
#[derive(Default)]
pub(crate) struct Mocks {
    pub(crate) configuration: MockConfigurationService,
    pub(crate) dishes: MockDishesService,
    pub(crate) promotions: MockPromotionsService,
    pub(crate) carts: MockCartsService,
    pub(crate) orders: MockOrdersService,
    pub(crate) auth: MockAuthService,
}

impl Mocks {
    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            configuration: Arc::new(self.configuration),
            dishes: Arc::new(self.dishes),
            promotions: Arc::new(self.promotions),
            carts: Arc::new(self.carts),
            orders: Arc::new(self.orders),
            auth: Arc::new(self.auth),
        })
    }
}

#[derive(Debug)]
struct InjectPrincipal(Principal);

#[async_trait]
impl Handler for InjectPrincipal {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_principal(self.0);
        ctrl.call_next(req, depot, res).await;
    }
}

/// Serve `route` as if `principal` had authenticated.
pub(crate) fn service_as(mocks: Mocks, principal: Principal, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(mocks.into_state()))
            .hoop(InjectPrincipal(principal))
            .push(route),
    )
}

/// Serve `route` as [`TEST_USER`].
pub(crate) fn user_service(mocks: Mocks, route: Router) -> Service {
    service_as(mocks, TEST_USER, route)
}
