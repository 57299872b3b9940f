pub mod charts;
pub mod login;
pub mod panels;
pub mod preview;
pub mod table;
