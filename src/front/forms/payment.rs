use std::{cell::Cell, rc::Rc};

use crate::{
    api::checkout::{CheckoutForm, PaymentFields},
    models::payment_form::FieldId,
    services::FieldAccessor,
};

#[derive(serde::Deserialize, Debug, Default)]
pub struct ProductQuery {
    pub product_id: Option<String>,
}

/// Fields posted by the checkout page
#[derive(serde::Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct PaymentForm {
    pub name_on_card: String,
    pub card_number: String,
    pub expiration_date: String,
    pub security_code: String,
}

#[derive(serde::Deserialize, Debug)]
pub struct FieldFormatRequest {
    pub field: FieldId,
    pub value: String,
}

#[derive(serde::Serialize, Debug)]
pub struct FieldFormatResponse {
    pub value: String,
}

/// Remembers which input asked for focus while handling one request
#[derive(Clone, Debug, Default)]
pub struct FocusSlot(Rc<Cell<Option<FieldId>>>);

impl FocusSlot {
    pub fn get(&self) -> Option<FieldId> {
        self.0.get()
    }
}

/// A posted value acting as a form input
pub struct SubmittedField {
    id: FieldId,
    value: String,
    focus: FocusSlot,
}

impl FieldAccessor for SubmittedField {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn focus(&mut self) {
        self.focus.0.set(Some(self.id));
    }
}

impl PaymentForm {
    pub fn into_checkout_form(self, product_id: i64, focus: &FocusSlot) -> CheckoutForm {
        let field = |id: FieldId, value: String| {
            Box::new(SubmittedField {
                id,
                value,
                focus: focus.clone(),
            })
        };

        CheckoutForm::new(
            product_id,
            PaymentFields {
                name: field(FieldId::Name, self.name_on_card),
                card_number: field(FieldId::CardNumber, self.card_number),
                expiry: field(FieldId::Expiry, self.expiration_date),
                cvv: field(FieldId::Cvv, self.security_code),
            },
        )
    }
}
