pub mod companies;
pub mod history;
