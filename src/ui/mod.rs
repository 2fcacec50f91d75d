//! UI panel rendering subsystem
//!
//! This module contains all panel rendering for the Folio GUI:
//! - Navbar (links, theme toggle, hamburger menu)
//! - Page sections (hero, about, skills, projects, certificates,
//!   resume, contact, footer)
//! - Panel manager (page orchestration, measurement and scroll plumbing)
//! - Shared widgets (headings, cards, reveal scopes)

pub mod about;
pub mod certificates;
pub mod contact_panel;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod panel_manager;
pub mod projects;
pub mod resume;
pub mod skills;
pub mod widgets;
