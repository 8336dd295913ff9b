pub mod payment_form;
pub mod product;
