pub mod types;
pub mod verdict;

pub use types::{PhishingLabel, PhishingOutcome, SpamLabel};
pub use verdict::{Evaluation, UrlFinding, Verdict};
