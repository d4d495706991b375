pub mod auth;
pub mod cms;
pub mod layout;
pub mod news;
pub mod question;
