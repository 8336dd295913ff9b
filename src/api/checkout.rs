//! The checkout form: live formatting of the four inputs and the
//! all-or-nothing submission.

use log::{debug, info};

use crate::{
    api::{CheckoutError, ErrorList, payment_input},
    models::payment_form::{
        CalendarMonth, FieldId, FormStatus, NavigationTarget, PaymentFormState,
    },
    services::{Clock, ImplFieldAccessor, Notifier},
};

/// Rewrites a raw input value the way the input's change handler does
pub fn format_field(field: FieldId, raw_value: &str) -> String {
    match field {
        FieldId::Name => payment_input::sanitize_name(raw_value),
        FieldId::CardNumber => payment_input::format_card_number(raw_value),
        FieldId::Expiry => payment_input::format_expiry(raw_value),
        FieldId::Cvv => payment_input::sanitize_cvv(raw_value),
    }
}

/// Runs every validator; failures come back in field precedence order
pub fn validate_payment(form_state: &PaymentFormState, current_month: CalendarMonth) -> ErrorList {
    let checks = [
        (
            payment_input::validate_name(&form_state.name),
            CheckoutError::InvalidName,
        ),
        (
            payment_input::validate_card_number(&form_state.card_number),
            CheckoutError::InvalidCardNumber,
        ),
        (
            payment_input::validate_expiry(&form_state.expiry, current_month),
            CheckoutError::InvalidExpiry,
        ),
        (
            payment_input::validate_cvv(&form_state.cvv),
            CheckoutError::InvalidCvv,
        ),
    ];

    checks
        .into_iter()
        .filter(|(is_valid, _)| !is_valid)
        .map(|(_, error)| error)
        .collect()
}

/// One accessor per input of the checkout form
pub struct PaymentFields {
    pub name: ImplFieldAccessor,
    pub card_number: ImplFieldAccessor,
    pub expiry: ImplFieldAccessor,
    pub cvv: ImplFieldAccessor,
}

impl PaymentFields {
    fn get(&self, field: FieldId) -> &ImplFieldAccessor {
        match field {
            FieldId::Name => &self.name,
            FieldId::CardNumber => &self.card_number,
            FieldId::Expiry => &self.expiry,
            FieldId::Cvv => &self.cvv,
        }
    }

    fn get_mut(&mut self, field: FieldId) -> &mut ImplFieldAccessor {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::CardNumber => &mut self.card_number,
            FieldId::Expiry => &mut self.expiry,
            FieldId::Cvv => &mut self.cvv,
        }
    }
}

/// Checkout form bound to the product being bought.
///
/// Starts in [FormStatus::Editing]; only a submission where every field
/// passes moves it to [FormStatus::Submitted], after which the form
/// ignores further input.
pub struct CheckoutForm {
    product_id: i64,
    fields: PaymentFields,
    status: FormStatus,
}

impl CheckoutForm {
    pub fn new(product_id: i64, fields: PaymentFields) -> Self {
        Self {
            product_id,
            fields,
            status: FormStatus::Editing,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Key press filter for `field`, checked before the key is inserted
    pub fn on_keydown(&self, field: FieldId, key: &str) -> payment_input::KeystrokeAction {
        if self.status == FormStatus::Submitted {
            return payment_input::KeystrokeAction::Suppress;
        }

        if !field.is_digits_only() {
            return payment_input::KeystrokeAction::Allow;
        }

        payment_input::restrict_digits_on_keystroke(key)
    }

    /// Change handler for `field`: rewrites its value in place
    pub fn on_input(&mut self, field: FieldId) {
        if self.status == FormStatus::Submitted {
            return;
        }

        let accessor = self.fields.get_mut(field);
        let raw_value = accessor.value();
        let formatted = format_field(field, &raw_value);

        if formatted != raw_value {
            accessor.set_value(&formatted);
        }
    }

    /// Current values of the four inputs
    pub fn state(&self) -> PaymentFormState {
        let mut form_state = PaymentFormState::default();
        for field in FieldId::ALL {
            form_state.set_value(field, self.fields.get(field).value());
        }

        form_state
    }

    /// Validates all fields together.
    ///
    /// On failure every message is reported to `notifier` in one batch,
    /// the first invalid field gets the focus and the form keeps editing.
    pub fn submit(
        &mut self,
        notifier: &mut dyn Notifier,
        clock: &dyn Clock,
    ) -> Result<NavigationTarget, ErrorList> {
        let navigation_target = NavigationTarget {
            product_id: self.product_id,
        };

        if self.status == FormStatus::Submitted {
            debug!("product {} checkout already submitted", self.product_id);
            return Ok(navigation_target);
        }

        let errors = validate_payment(&self.state(), clock.now());

        if !errors.is_empty() {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            notifier.report(&messages);

            if let Some(first_invalid) = errors.first().and_then(CheckoutError::field) {
                self.fields.get_mut(first_invalid).focus();
            }

            return Err(errors);
        }

        self.status = FormStatus::Submitted;
        info!("payment accepted for product {}", self.product_id);

        Ok(navigation_target)
    }
}
