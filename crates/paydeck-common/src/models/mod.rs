mod payment;

pub use payment::{Payment, PaymentStatus};
