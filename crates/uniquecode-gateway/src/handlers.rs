mod code;
mod health;

pub use code::create_code_handler;
pub use health::health_handler;
