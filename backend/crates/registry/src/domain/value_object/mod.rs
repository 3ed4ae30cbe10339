//! Value Object Module

pub mod email;
pub mod national_id;
pub mod phone;

pub use email::Email;
pub use national_id::NationalId;
pub use phone::Phone;
