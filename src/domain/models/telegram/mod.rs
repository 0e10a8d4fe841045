pub mod init_data;

pub use init_data::*;
