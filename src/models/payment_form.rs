use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::consts;

/// The four inputs of the checkout form.
///
/// Declaration order is the precedence order used to pick which field
/// gets focus after a rejected submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize, Display)]
pub enum FieldId {
    #[serde(rename = "name_on_card")]
    #[display("name_on_card")]
    Name,
    #[serde(rename = "card_number")]
    #[display("card_number")]
    CardNumber,
    #[serde(rename = "expiration_date")]
    #[display("expiration_date")]
    Expiry,
    #[serde(rename = "security_code")]
    #[display("security_code")]
    Cvv,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::CardNumber,
        FieldId::Expiry,
        FieldId::Cvv,
    ];

    /// `id` attribute of the matching `<input>` in the checkout page
    pub fn html_id(&self) -> &'static str {
        match self {
            FieldId::Name => "name-on-card",
            FieldId::CardNumber => "card-number",
            FieldId::Expiry => "expiration-date",
            FieldId::Cvv => "security-code",
        }
    }

    /// Card number, expiry and CVV only accept digits from the keyboard
    pub fn is_digits_only(&self) -> bool {
        !matches!(self, FieldId::Name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    #[default]
    Editing,
    Submitted,
}

/// Snapshot of the values currently held by the checkout inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PaymentFormState {
    pub name: String,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
}

impl PaymentFormState {
    pub fn set_value(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::Name => self.name = value,
            FieldId::CardNumber => self.card_number = value,
            FieldId::Expiry => self.expiry = value,
            FieldId::Cvv => self.cvv = value,
        }
    }
}

/// A calendar month, ordered by year then month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
}

/// Where the browser goes after an accepted payment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub product_id: i64,
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}?{}={}",
            consts::CONFIRMATION_VIEW_PATH,
            consts::PRODUCT_ID_QUERY_PARAM,
            self.product_id
        )
    }
}
