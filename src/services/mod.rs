//! Capabilities the checkout form is handed instead of reaching for the
//! page, the system clock or a dialog box directly.

pub mod clock;
pub mod notification;

use crate::models::payment_form::CalendarMonth;

/// Read/write access to one form input
#[cfg_attr(test, mockall::automock)]
pub trait FieldAccessor {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Moves the input focus to this field
    fn focus(&mut self);
}

/// Surface where a rejected submission shows its messages, all at once
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn report(&mut self, messages: &[String]);
}

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current calendar month
    fn now(&self) -> CalendarMonth;
}

pub type ImplFieldAccessor = Box<dyn FieldAccessor>;
pub type ImplClock = Box<dyn Clock>;
