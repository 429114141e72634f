pub mod question;
pub mod response;
