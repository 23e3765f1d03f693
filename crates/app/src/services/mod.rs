//! External service clients.

pub mod chef;
