use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const PRODUCT_NAME: &str = "Studio Headphones MK II";
pub const PRODUCT_DESCRIPTION: &str = "store checkout single product";
pub const PRODUCT_PRICE: Decimal = dec!(2800.00);

/// Card-token endpoint of the payment gateway
pub const GATEWAY_ENDPOINT_CARD_TOKENS: &str = "https://api.stripe.com/v1/tokens";
/// Path of the charge endpoint, relative to the configured backend base url
pub const CHARGE_API_PATH: &str = "/api/checkout";

/// Minor units (cents) per currency unit, amounts travel as integers
pub const MINOR_UNITS_PER_CURRENCY: Decimal = dec!(100);
