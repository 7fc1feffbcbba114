pub mod conjugate;
pub mod define;
pub mod init;
pub mod quiz;
