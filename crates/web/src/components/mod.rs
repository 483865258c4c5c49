//! Reusable HTML fragments. Every component is a pure function returning
//! markup; user-facing text is escaped with [`easi_core::html::escape_html`].

pub mod accordion;
pub mod animated_title;
pub mod cards;
pub mod chat_widget;
pub mod chrome;
pub mod contact_form;
pub mod reveal;

pub use accordion::{faq_accordion, faq_section, Faq, FaqCategory, FAQ_CATEGORIES};
pub use animated_title::{animated_title, animated_title_lines, HeadingTag, TitleLine, TitleStyle};
pub use cards::{check_list, comparison_table, feature_card, feature_grid, stat_row, Feature, Stat};
pub use chat_widget::chat_widget;
pub use chrome::{beta_banner, footer, header};
pub use contact_form::contact_form;
pub use reveal::{reveal, reveal_with_class, Reveal};
