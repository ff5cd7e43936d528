pub mod count_map;
pub mod log_line;

pub use count_map::CountMap;
pub use log_line::{FAILED_LOGIN_MARKERS, client_id, is_failed_login, malformed_lines};
