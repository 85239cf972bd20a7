use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform acknowledgement body for write operations.
/// The API reports success only; it never distinguishes created from
/// already-existed.
#[derive(Serialize, Deserialize, Debug)]
pub struct Status {
    pub status: &'static str,
}

impl Status {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
