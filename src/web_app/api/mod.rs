// web_app/api/mod.rs - API module for server-side logic
//
// This module contains the session store, its settings, the server
// logger and the cart operations the server functions call into.

pub mod cart_ops;
pub mod logger;
pub mod session;
pub mod settings;
