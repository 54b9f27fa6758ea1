//! Cart Records

use crate::{
    domain::{dishes::records::DishUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<Cart>;

/// A user's cart. `uuid` is `None` until the cart is first saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub uuid: Option<CartUuid>,
    pub user_uuid: UserUuid,
    pub lines: Vec<CartLineRecord>,
}

impl Cart {
    /// An unsaved cart with no lines.
    #[must_use]
    pub fn empty(user_uuid: UserUuid) -> Self {
        Self {
            uuid: None,
            user_uuid,
            lines: Vec::new(),
        }
    }
}

/// Cart Line UUID
pub type CartLineUuid = TypedUuid<CartLineRecord>;

/// Cart Line Record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineRecord {
    pub uuid: CartLineUuid,
    pub dish_uuid: DishUuid,
    pub quantity: u32,
}
