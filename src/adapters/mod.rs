//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements  | Connects to                 |
//! |------------|-------------|-----------------------------|
//! | `log_sink` | EventSink   | `log` facade                |
//! | `text`     | TextSource  | built-in English / JSON file|

pub mod log_sink;
pub mod text;
