//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements   | Connects to                    |
//! |----------------|--------------|--------------------------------|
//! | `serial`       | EventSource  | Sensor serial port (serialport)|
//! | `http_store`   | RemoteStore  | JSON REST store (ureq)         |
//! | `memory_store` | RemoteStore  | In-process map (simulation)    |
//! | `log_sink`     | EventSink    | Console via `log`              |
//! | `time`         | Clock        | `std::thread::sleep`           |

pub mod http_store;
pub mod log_sink;
pub mod memory_store;
pub mod serial;
pub mod time;
