pub mod interactive;
pub mod invest;
pub mod schema;
pub mod tax;
