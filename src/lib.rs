//! MPIN strength evaluation library
//!
//! Classifies a 4- or 6-digit mobile banking PIN as STRONG, MODERATE or
//! WEAK and explains why: common-value lookup, digit repetition, sequences,
//! repeating blocks, keypad patterns and correlation with personal dates.
//!
//! # Features
//!
//! - `async` (default): Enables async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `MPIN_DENYLIST_PATH`: Custom path to a denylist file extending the
//!   built-in common-MPIN set (default: `./assets/denylist.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use mpin_strength::{DemographicDates, MpinStrength, evaluate_mpin_strength};
//! use secrecy::SecretString;
//!
//! let mpin = SecretString::new("0506".to_string().into());
//! let dates = DemographicDates::from_strings(Some("2001-06-05"), None, None);
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_mpin_strength(&mpin, &dates, None).unwrap();
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_mpin_strength(&mpin, &dates).unwrap();
//!
//! assert_eq!(evaluation.strength, MpinStrength::WEAK);
//! for reason in &evaluation.reasons {
//!     println!("{}", reason);
//! }
//! ```

// Re-export for callers constructing dates directly
pub use chrono::NaiveDate;

// Internal modules
mod dates;
mod denylist;
mod detectors;
mod evaluator;
mod types;

// Public API
pub use dates::DemographicDates;
pub use denylist::{
    DenylistError, get_denylist, init_denylist, init_denylist_from_path, is_common_mpin,
};
pub use evaluator::{EvaluationError, evaluate_mpin_strength, validate_mpin};
pub use types::{MpinEvaluation, MpinStrength};

#[cfg(feature = "async")]
pub use evaluator::evaluate_mpin_strength_tx;
