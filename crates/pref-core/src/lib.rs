pub mod category;
pub mod config;
pub mod error;
pub mod score;

pub use category::Category;
pub use config::{DetectorConfig, PhraseWeights, StrengthConfig};
pub use error::{PrefError, Result};
pub use score::ScoreVector;
