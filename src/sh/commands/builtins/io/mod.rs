pub mod cat;
pub mod clear;
pub mod date;
pub mod echo;
pub mod help;
pub mod history;
