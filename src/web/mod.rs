//! Web surface: routing, request flow, page rendering

pub mod flow;
pub mod lottie;
pub mod server;
pub mod views;
