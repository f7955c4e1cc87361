pub mod session;
pub mod test_result;
pub mod user;
