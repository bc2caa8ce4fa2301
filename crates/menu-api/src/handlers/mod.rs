//! HTTP handlers

pub mod health;
pub mod menu;
pub mod menu_items;
pub mod pages;
