//! # jsondom-path
//!
//! Lookup of per-user directories and small path-string helpers.
//!
//! Directory lookups read the environment on every call, either from the current process or
//! from any [`Environment`] the caller provides:
//!
//! ```
//! use std::{collections::HashMap, ffi::OsString};
//! use jsondom_path::{config_directory_in, home_directory_in};
//!
//! let env: HashMap<String, OsString> = [
//!     ("HOME".to_string(), OsString::from("/home/ferris")),
//!     ("USERPROFILE".to_string(), OsString::from("/home/ferris")),
//! ]
//! .into();
//! assert_eq!(home_directory_in(&env)?, std::path::Path::new("/home/ferris"));
//! assert!(config_directory_in(&env)?.starts_with("/home/ferris"));
//! # Ok::<(), jsondom_path::Error>(())
//! ```
mod env;
mod error;
mod paths;

pub use env::{
    config_directory, config_directory_in, executable_path, home_directory, home_directory_in,
    Environment, SystemEnvironment,
};
pub use error::Error;
pub use paths::{
    concatenate, extension_of, filename_of, parent_of, DIRECTORY_SEPARATOR, PATH_SEPARATOR,
};
