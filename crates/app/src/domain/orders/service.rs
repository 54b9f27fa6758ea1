//! Orders Service

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use jiff::Zoned;
use lunchline::{
    pricing::{Totals, compute_totals},
    schedule::KitchenPolicy,
};
use mockall::automock;
use rust_decimal::Decimal;
use sqlx::{Postgres, Transaction};
use tracing::{Span, info};

use crate::{
    auth::Principal,
    clock::Clock,
    database::{Db, max_order_total, quantity_in_range},
    domain::{
        carts::repositories::{PgCartLinesRepository, PgCartsRepository},
        configuration::repository::PgConfigurationRepository,
        dishes::resolver::PgPriceResolver,
        orders::{
            OrdersServiceError,
            data::{FrozenLine, NewOrderLine, OrderDraft, OrderFilter},
            records::{OrderLineRecord, OrderLineUuid, OrderRecord, OrderUuid},
            repositories::{PgOrderLinesRepository, PgOrdersRepository},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgOrdersService {
    db: Db,
    clock: Arc<dyn Clock>,
    configuration: PgConfigurationRepository,
    carts: PgCartsRepository,
    cart_lines: PgCartLinesRepository,
    resolver: PgPriceResolver,
    orders: PgOrdersRepository,
    lines: PgOrderLinesRepository,
}

impl PgOrdersService {
    #[must_use]
    pub fn new(db: Db, clock: Arc<dyn Clock>) -> Self {
        Self {
            db,
            clock,
            configuration: PgConfigurationRepository::new(),
            carts: PgCartsRepository::new(),
            cart_lines: PgCartLinesRepository::new(),
            resolver: PgPriceResolver::new(),
            orders: PgOrdersRepository::new(),
            lines: PgOrderLinesRepository::new(),
        }
    }

    async fn policy(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<KitchenPolicy, OrdersServiceError> {
        Ok(self.configuration.get_configuration(tx).await?.policy())
    }

    /// Lock `order` for a line change, checking ownership and that its
    /// delivery day is still open.
    async fn lock_modifiable(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        requester: Principal,
        order: OrderUuid,
        now: &Zoned,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let policy = self.policy(tx).await?;

        policy.changes_allowed(now)?;

        let record = self
            .orders
            .lock_order(tx, order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        if !requester.can_access(record.user_uuid) {
            return Err(OrdersServiceError::Forbidden);
        }

        policy.order_changes_allowed(record.delivery_date, now)?;

        Ok(record)
    }

    /// Recompute and store the totals of `order` from its current lines,
    /// keeping the subvention granted when it was placed.
    async fn reprice(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: &OrderRecord,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let lines = self.lines.list_order_lines(tx, order.uuid).await?;
        let totals = storable(compute_totals(&lines, order.subvention)?)?;

        let mut updated = self.orders.update_totals(tx, order.uuid, totals).await?;
        updated.lines = lines;

        Ok(updated)
    }

    async fn subvention_for(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        policy: &KitchenPolicy,
        user: UserUuid,
        now: &Zoned,
    ) -> Result<Decimal, OrdersServiceError> {
        if self.orders.has_order_on(tx, user, now.date()).await? {
            return Ok(Decimal::ZERO);
        }

        Ok(policy.subvention_amount())
    }
}

/// Reject totals the order columns cannot hold.
fn storable(totals: Totals) -> Result<Totals, OrdersServiceError> {
    if totals.cost_total > max_order_total() {
        return Err(OrdersServiceError::InvalidData);
    }

    Ok(totals)
}

#[async_trait]
impl OrdersService for PgOrdersService {
    #[tracing::instrument(
        name = "orders.service.create_from_cart",
        skip(self),
        fields(
            user_uuid = %user,
            order_uuid = tracing::field::Empty,
            line_count = tracing::field::Empty,
            subvention = tracing::field::Empty
        ),
        err
    )]
    async fn create_from_cart(&self, user: UserUuid) -> Result<OrderRecord, OrdersServiceError> {
        let now = self.clock.now();

        let mut tx = self.db.begin_transaction().await?;

        let policy = self.policy(&mut tx).await?;

        policy.changes_allowed(&now)?;

        self.orders.lock_user(&mut tx, user).await?;

        let cart = self.carts.lock_cart_by_user(&mut tx, user).await?;

        let cart_lines = match cart {
            Some(cart) => self.cart_lines.list_cart_lines(&mut tx, cart).await?,
            None => Vec::new(),
        };

        let at = now.timestamp();
        let mut frozen = Vec::with_capacity(cart_lines.len());

        for line in &cart_lines {
            let current = self
                .resolver
                .current_cost(&mut tx, line.dish_uuid, at)
                .await?
                .ok_or(OrdersServiceError::InvalidReference)?;

            frozen.push(FrozenLine::new(current, line.quantity));
        }

        let subvention = self.subvention_for(&mut tx, &policy, user, &now).await?;
        let totals = storable(compute_totals(&frozen, subvention)?)?;
        let delivery = policy.today_delivery(&now)?;

        let draft = OrderDraft {
            uuid: OrderUuid::new(),
            user_uuid: user,
            delivery_at: delivery.timestamp(),
            delivery_date: delivery.date(),
            totals,
            subvention,
        };

        let mut order = self.orders.create_order(&mut tx, &draft).await?;

        order.lines = self
            .lines
            .create_order_lines(&mut tx, order.uuid, &frozen)
            .await?;

        if let Some(cart) = cart {
            self.cart_lines.delete_cart_lines(&mut tx, cart).await?;
        }

        tx.commit().await?;

        let span = Span::current();
        span.record("order_uuid", tracing::field::display(order.uuid));
        span.record("line_count", order.lines.len());
        span.record("subvention", tracing::field::display(subvention));

        info!(
            order_uuid = %order.uuid,
            cost_total = %order.cost_total,
            cost_to_pay = %order.cost_to_pay,
            "placed order"
        );

        Ok(order)
    }

    async fn get_order(
        &self,
        requester: Principal,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut record = self
            .orders
            .find_order(&mut tx, order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        if !requester.can_access(record.user_uuid) {
            return Err(OrdersServiceError::Forbidden);
        }

        record.lines = self.lines.list_order_lines(&mut tx, order).await?;

        tx.commit().await?;

        Ok(record)
    }

    async fn list_orders(
        &self,
        requester: Principal,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError> {
        let owner = (!requester.is_admin).then_some(requester.user_uuid);

        let mut tx = self.db.begin_transaction().await?;

        let mut orders = self.orders.list_orders(&mut tx, owner, filter.day).await?;

        let uuids: Vec<OrderUuid> = orders.iter().map(|order| order.uuid).collect();

        let mut lines_by_order: HashMap<OrderUuid, Vec<OrderLineRecord>> = HashMap::new();

        for line in self.lines.list_lines_for_orders(&mut tx, &uuids).await? {
            lines_by_order.entry(line.order_uuid).or_default().push(line);
        }

        tx.commit().await?;

        for order in &mut orders {
            order.lines = lines_by_order.remove(&order.uuid).unwrap_or_default();
        }

        Ok(orders)
    }

    #[tracing::instrument(
        name = "orders.service.cancel_order",
        skip(self, requester),
        fields(order_uuid = %order, user_uuid = %requester.user_uuid),
        err
    )]
    async fn cancel_order(
        &self,
        requester: Principal,
        order: OrderUuid,
    ) -> Result<(), OrdersServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let record = self
            .orders
            .lock_order(&mut tx, order)
            .await?
            .ok_or(OrdersServiceError::NotFound)?;

        if !requester.can_access(record.user_uuid) {
            return Err(OrdersServiceError::Forbidden);
        }

        self.orders.delete_order(&mut tx, order).await?;

        tx.commit().await?;

        info!(order_uuid = %order, "cancelled order");

        Ok(())
    }

    #[tracing::instrument(
        name = "orders.service.add_line",
        skip(self, requester, line),
        fields(order_uuid = %order, dish_uuid = %line.dish_uuid, quantity = line.quantity),
        err
    )]
    async fn add_line(
        &self,
        requester: Principal,
        order: OrderUuid,
        line: NewOrderLine,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if !quantity_in_range(line.quantity) {
            return Err(OrdersServiceError::InvalidData);
        }

        let now = self.clock.now();

        let mut tx = self.db.begin_transaction().await?;

        let record = self.lock_modifiable(&mut tx, requester, order, &now).await?;

        let current = self
            .resolver
            .current_cost(&mut tx, line.dish_uuid, now.timestamp())
            .await?
            .ok_or(OrdersServiceError::InvalidReference)?;

        self.lines
            .create_order_lines(&mut tx, order, &[FrozenLine::new(current, line.quantity)])
            .await?;

        let updated = self.reprice(&mut tx, &record).await?;

        tx.commit().await?;

        info!(order_uuid = %order, cost_total = %updated.cost_total, "added order line");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "orders.service.remove_line",
        skip(self, requester),
        fields(order_uuid = %order, line_uuid = %line),
        err
    )]
    async fn remove_line(
        &self,
        requester: Principal,
        order: OrderUuid,
        line: OrderLineUuid,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let now = self.clock.now();

        let mut tx = self.db.begin_transaction().await?;

        let record = self.lock_modifiable(&mut tx, requester, order, &now).await?;

        let rows_affected = self.lines.delete_line(&mut tx, order, line).await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        let updated = self.reprice(&mut tx, &record).await?;

        tx.commit().await?;

        info!(order_uuid = %order, cost_total = %updated.cost_total, "removed order line");

        Ok(updated)
    }

    #[tracing::instrument(
        name = "orders.service.modify_line_quantity",
        skip(self, requester),
        fields(order_uuid = %order, line_uuid = %line),
        err
    )]
    async fn modify_line_quantity(
        &self,
        requester: Principal,
        order: OrderUuid,
        line: OrderLineUuid,
        quantity: u32,
    ) -> Result<OrderRecord, OrdersServiceError> {
        if !quantity_in_range(quantity) {
            return Err(OrdersServiceError::InvalidData);
        }

        let now = self.clock.now();

        let mut tx = self.db.begin_transaction().await?;

        let record = self.lock_modifiable(&mut tx, requester, order, &now).await?;

        let rows_affected = self
            .lines
            .update_line_quantity(&mut tx, order, line, quantity)
            .await?;

        if rows_affected == 0 {
            return Err(OrdersServiceError::NotFound);
        }

        let updated = self.reprice(&mut tx, &record).await?;

        tx.commit().await?;

        info!(order_uuid = %order, cost_total = %updated.cost_total, "modified order line");

        Ok(updated)
    }

    async fn subvention_preview(&self, user: UserUuid) -> Result<Decimal, OrdersServiceError> {
        let now = self.clock.now();

        let mut tx = self.db.begin_transaction().await?;

        let policy = self.policy(&mut tx).await?;

        policy.changes_allowed(&now)?;

        let subvention = self.subvention_for(&mut tx, &policy, user, &now).await?;

        tx.commit().await?;

        Ok(subvention)
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Place an order from the user's cart and empty the cart.
    ///
    /// The first order of the day receives the configured subvention; later
    /// ones receive none.
    async fn create_from_cart(&self, user: UserUuid) -> Result<OrderRecord, OrdersServiceError>;

    async fn get_order(
        &self,
        requester: Principal,
        order: OrderUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// List the requester's orders, or every order for administrators.
    async fn list_orders(
        &self,
        requester: Principal,
        filter: OrderFilter,
    ) -> Result<Vec<OrderRecord>, OrdersServiceError>;

    /// Delete an order and its lines. Allowed at any time.
    async fn cancel_order(
        &self,
        requester: Principal,
        order: OrderUuid,
    ) -> Result<(), OrdersServiceError>;

    /// Add a line priced at the dish's current cost.
    async fn add_line(
        &self,
        requester: Principal,
        order: OrderUuid,
        line: NewOrderLine,
    ) -> Result<OrderRecord, OrdersServiceError>;

    async fn remove_line(
        &self,
        requester: Principal,
        order: OrderUuid,
        line: OrderLineUuid,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Change a line's quantity. The unit cost frozen on the line is kept.
    async fn modify_line_quantity(
        &self,
        requester: Principal,
        order: OrderUuid,
        line: OrderLineUuid,
        quantity: u32,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Subvention the user's next order today would receive.
    async fn subvention_preview(&self, user: UserUuid) -> Result<Decimal, OrdersServiceError>;
}
