pub mod db;
pub mod errors;
pub mod kv;
pub mod note;
pub mod player;
pub mod seed;
pub mod tag;

#[cfg(test)]
mod tests;
