//! Page components.

pub mod home;
