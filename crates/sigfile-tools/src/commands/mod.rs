pub mod formats;
pub mod info;
