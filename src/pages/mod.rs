//! Page components mounted by the router.

pub mod dashboard;
pub mod login;
pub mod password;
pub mod section;
