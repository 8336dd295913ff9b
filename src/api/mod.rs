//! Checkout logic, free of any rendering surface.

pub mod checkout;
pub mod payment_input;
pub mod product;

use derive_more::{Display, Error};

use crate::models::payment_form::FieldId;

/// Everything that can stop a checkout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CheckoutError {
    #[display("Enter first and last name (letters only).")]
    InvalidName,
    #[display("Enter a valid 16-digit card number (XXXX-XXXX-XXXX-XXXX).")]
    InvalidCardNumber,
    #[display("Enter a valid expiration date MM/YY (this month or later).")]
    InvalidExpiry,
    #[display("Enter a valid 3-digit CVV.")]
    InvalidCvv,
    #[display("Product not found. Please go back and pick an item.")]
    ProductNotFound,
}

impl CheckoutError {
    /// The input responsible for a field error
    pub fn field(&self) -> Option<FieldId> {
        match self {
            CheckoutError::InvalidName => Some(FieldId::Name),
            CheckoutError::InvalidCardNumber => Some(FieldId::CardNumber),
            CheckoutError::InvalidExpiry => Some(FieldId::Expiry),
            CheckoutError::InvalidCvv => Some(FieldId::Cvv),
            CheckoutError::ProductNotFound => None,
        }
    }
}

/// Field errors of one rejected submission, in field precedence order
pub type ErrorList = Vec<CheckoutError>;
