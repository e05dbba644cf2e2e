//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each page behavior gets its own small model (`contact`, `theme`, `cards`,
//! `scroll_spy`) holding plain data, so components stay thin and the rules
//! are testable without a browser.

pub mod cards;
pub mod contact;
pub mod scroll_spy;
pub mod theme;
