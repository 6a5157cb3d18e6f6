pub mod handle_map;
pub mod session_cache;
