pub mod constants;
pub mod events;
pub mod format;
pub mod storage;

pub use constants::{API_BASE_URL, TOKEN_STORAGE_KEY};
pub use events::{confirm, input_value, select_value, textarea_value};
pub use format::format_date;
pub use storage::{load_from_storage, remove_from_storage, save_to_storage};
