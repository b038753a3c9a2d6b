//! Cart action wire format.

use market_app::carts::data::CartAction;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Change to apply to a cart line. Names are matched case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub(crate) enum CartActionParam {
    /// Add one unit
    Plus,

    /// Remove one unit
    Minus,

    /// Remove the line
    Delete,
}

#[derive(Debug, Error)]
#[error("unknown cart action: {0}")]
pub(crate) struct UnknownCartAction(String);

impl TryFrom<String> for CartActionParam {
    type Error = UnknownCartAction;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        match name.to_ascii_uppercase().as_str() {
            "PLUS" => Ok(Self::Plus),
            "MINUS" => Ok(Self::Minus),
            "DELETE" => Ok(Self::Delete),
            _ => Err(UnknownCartAction(name)),
        }
    }
}

impl From<CartActionParam> for CartAction {
    fn from(action: CartActionParam) -> Self {
        match action {
            CartActionParam::Plus => CartAction::Increase,
            CartActionParam::Minus => CartAction::Decrease,
            CartActionParam::Delete => CartAction::Remove,
        }
    }
}
