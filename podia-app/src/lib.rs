mod care;
mod controller;
mod error;
pub mod logger;
mod page;
mod state;

pub use care::CareLookup;
pub use controller::{AnalysisOutcome, AppController};
pub use error::{AppError, Result};
pub use page::Page;
pub use state::{AppState, Records};
