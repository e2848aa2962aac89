pub mod classify;
pub mod energy;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod py;
pub mod report;
pub mod storage;
pub mod types;

pub use classify::{classify, classify_batch, read_packet};
pub use energy::RoundTo;
pub use errors::ClassifyError;
pub use models::{BaseRecord, Running, Swimming, Walking, Workout};
pub use report::{print_summary, render};
pub use storage::{load_packets, save_packets};
pub use types::{SensorPacket, WorkoutSummary};
