pub mod auth_utils;
pub mod token_utils;
