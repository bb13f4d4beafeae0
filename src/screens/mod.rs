pub mod create;
pub mod deck;
pub mod home;
pub mod more;
pub mod search;
pub mod study;
