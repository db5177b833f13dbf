pub mod cursor;
pub mod logging;
pub mod replay;
pub mod settings;
