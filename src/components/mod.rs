//! Reusable UI components rendered by the page shell.
//!
//! ARCHITECTURE
//! ============
//! Each component owns its own DOM subtree and signals; the only shared state
//! is the theme, provided as context by `app::App`.

pub mod contact_form;
pub mod expandable_card;
pub mod mini_map;
pub mod page_section;
pub mod theme_toggle;
