pub mod chat;
pub mod contact;
pub mod pages;
pub mod seo;
