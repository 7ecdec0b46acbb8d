//! Secret Santa matcher.
//!
//! Assigns every participant exactly one recipient so that nobody gives to
//! themselves and nobody repeats a giver -> recipient pair from a previous
//! round. The assignment is a derangement of the roster that avoids the
//! history edges.
//!
//! Each attempt shuffles the roster and assigns greedily; an attempt that
//! paints itself into a corner fails and [`assign`] reshuffles, up to a
//! bounded number of attempts. Randomness always comes from the caller's
//! [`rand::Rng`], so a seeded generator gives reproducible results.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use santa_match::assign;
//! use santa_model::{MatchOptions, Participant};
//!
//! let roster = vec![Participant::new("Alice", "a@x"), Participant::new("Bob", "b@x")];
//! let mut rng = StdRng::seed_from_u64(42);
//! let outcome = assign(&roster, &[], &MatchOptions::default(), &mut rng).unwrap();
//! assert_eq!(outcome.assignments[0].recipient_email(), "b@x");
//! ```

mod assign;
mod error;
mod exclusion;
mod matcher;
mod verify;

pub use assign::{MatchOutcome, assign, check_feasible};
pub use error::{MatchError, Result, Violation};
pub use exclusion::ExclusionSet;
pub use matcher::{is_valid_choice, match_once, valid_choices};
pub use verify::verify_assignments;
