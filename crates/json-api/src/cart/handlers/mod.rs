//! Cart Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lunchline_app::domain::carts::records::Cart;

pub(crate) mod clear;
pub(crate) mod get;
pub(crate) mod save;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    pub uuid: Uuid,
    pub dish_uuid: Uuid,
    pub quantity: u32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// Absent until the cart is first saved
    pub uuid: Option<Uuid>,
    pub lines: Vec<CartLineResponse>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        CartResponse {
            uuid: cart.uuid.map(Into::into),
            lines: cart
                .lines
                .into_iter()
                .map(|line| CartLineResponse {
                    uuid: line.uuid.into(),
                    dish_uuid: line.dish_uuid.into(),
                    quantity: line.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use lunchline_app::domain::{
        carts::records::{Cart, CartLineRecord, CartLineUuid, CartUuid},
        dishes::records::DishUuid,
    };

    use crate::test_helpers::TEST_USER;

    pub(super) fn make_cart(lines: &[(DishUuid, u32)]) -> Cart {
        Cart {
            uuid: Some(CartUuid::new()),
            user_uuid: TEST_USER.user_uuid,
            lines: lines
                .iter()
                .map(|&(dish_uuid, quantity)| CartLineRecord {
                    uuid: CartLineUuid::new(),
                    dish_uuid,
                    quantity,
                })
                .collect(),
        }
    }
}
