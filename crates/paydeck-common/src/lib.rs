pub mod api;
pub mod error;
pub mod models;

pub use api::{PaymentsPage, ScheduleKey};
pub use error::{CommonError, CommonResult};
pub use models::{Payment, PaymentStatus};
