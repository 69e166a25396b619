/// Database models for the invoice dashboard
///
/// # Models
///
/// - `invoice`: Invoices and their payment status
/// - `user`: Accounts used by credentials sign-in

pub mod invoice;
pub mod user;
