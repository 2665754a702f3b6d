//! Services backing the command line.
//!
//! - `apps` - Application and icon lookup with the selected theme and size

pub mod apps;
