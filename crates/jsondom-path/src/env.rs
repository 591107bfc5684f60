use std::{collections::HashMap, ffi::OsString, path::PathBuf};

use crate::Error;

#[cfg(windows)]
const HOME_VARIABLE: &str = "USERPROFILE";
#[cfg(not(windows))]
const HOME_VARIABLE: &str = "HOME";

#[cfg(windows)]
const CONFIG_SUFFIX: &[&str] = &["AppData", "Roaming"];
#[cfg(not(windows))]
const CONFIG_SUFFIX: &[&str] = &[".config"];

/// Source of environment variables.
///
/// Lookups go through this trait so that callers decide where values come from.
pub trait Environment {
    fn var(&self, key: &str) -> Option<OsString>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

impl Environment for HashMap<String, OsString> {
    fn var(&self, key: &str) -> Option<OsString> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<OsString> {
        (**self).var(key)
    }
}

/// Home directory of the current user, read from `HOME` (`USERPROFILE` on Windows).
///
/// # Errors
///
/// If the variable is unset or empty.
pub fn home_directory() -> Result<PathBuf, Error> {
    home_directory_in(&SystemEnvironment)
}

/// Like [`home_directory`], reading variables from `env`.
///
/// # Errors
///
/// If the variable is unset or empty.
pub fn home_directory_in<E: Environment + ?Sized>(env: &E) -> Result<PathBuf, Error> {
    match env.var(HOME_VARIABLE) {
        Some(value) if !value.is_empty() => {
            let path = PathBuf::from(value);
            log::debug!("Home directory resolved to {}", path.display());
            Ok(path)
        }
        _ => {
            log::warn!("`{HOME_VARIABLE}` is not set, the home directory is unknown");
            Err(Error::MissingVariable {
                name: HOME_VARIABLE,
            })
        }
    }
}

/// Per-user configuration directory: `~/.config` (`%USERPROFILE%\AppData\Roaming` on Windows).
///
/// # Errors
///
/// If the home directory can't be determined.
pub fn config_directory() -> Result<PathBuf, Error> {
    config_directory_in(&SystemEnvironment)
}

/// Like [`config_directory`], reading variables from `env`.
///
/// # Errors
///
/// If the home directory can't be determined.
pub fn config_directory_in<E: Environment + ?Sized>(env: &E) -> Result<PathBuf, Error> {
    let mut path = home_directory_in(env)?;
    path.extend(CONFIG_SUFFIX);
    log::debug!("Config directory resolved to {}", path.display());
    Ok(path)
}

/// Absolute path of the running executable.
///
/// # Errors
///
/// If the platform can't report it.
pub fn executable_path() -> Result<PathBuf, Error> {
    Ok(std::env::current_exe()?)
}
