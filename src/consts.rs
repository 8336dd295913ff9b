/// Keys the digit-only fields let through besides `0-9`
pub const ALLOWED_EDITING_KEYS: [&str; 7] = [
    "Backspace",
    "ArrowLeft",
    "ArrowRight",
    "Delete",
    "Tab",
    "Home",
    "End",
];

pub const CARD_NUMBER_DIGITS: usize = 16;
pub const CARD_NUMBER_GROUP_SIZE: usize = 4;
pub const EXPIRY_DIGITS: usize = 4;
pub const CVV_DIGITS: usize = 3;

/// Expiry years are always read as `20YY`
pub const EXPIRY_CENTURY: i32 = 2000;

pub const PRODUCT_ID_QUERY_PARAM: &str = "product_id";
pub const CONFIRMATION_VIEW_PATH: &str = "/thank-you";
pub const IMAGES_URL_PREFIX: &str = "/images";
