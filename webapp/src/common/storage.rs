use anyhow;

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::preference::PreferenceStore;

// LocalStore
//
// window.localStorage behind the PreferenceStore seam.  values are read and written raw
// rather than through gloo's json helpers, since older pages left non-json strings under
// the same keys and those still have to be readable
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        LocalStorage::raw().get_item(key).map_err(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            console_error!(format!("Failed to set local storage {key}: {err:?}"));
            anyhow::Error::msg("Local storage failure, see console log")
        })
    }
}
