pub mod environment;
pub mod files;
pub mod time;

pub use environment::{get_data_dir, get_default_export_path, get_default_records_path};
pub use files::validate_file_size;
pub use time::{datetime_from_epoch_secs, iso_short_date};
