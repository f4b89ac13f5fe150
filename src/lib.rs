pub mod acoustic;
pub mod pam;
pub mod transmission;
pub mod ui;
pub mod utils;
