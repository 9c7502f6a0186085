//! Core application logic: page state, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod pages;
pub mod state;
