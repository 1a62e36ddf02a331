//! API Routes
//!
//! Route handlers organized by functionality.

pub mod catalog;
pub mod health;
pub mod page;
pub mod save;
pub mod selection;
pub mod ui;
pub mod widgets;
