pub mod conf;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod table;

#[cfg(feature = "testutil")]
pub mod testutil;
