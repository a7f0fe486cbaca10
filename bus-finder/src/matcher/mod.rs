//! Bus matching and arrival estimation.
//!
//! This module answers: "which buses running right now are useful for
//! getting from this stop to that one, and how soon will they reach me?"
//!
//! For each vehicle in a live snapshot the engine measures its distance to
//! the source stop, classifies it against the trips and routes serving both
//! stops, and estimates its arrival under a fixed average speed.

mod classify;
mod config;
mod rank;
mod search;


pub use classify::{MatchClassifier, MatchKind};
pub use config::{DEFAULT_NEARBY_RADIUS_KM, SearchConfig};
pub use rank::{compare_matches, rank_matches};
pub use search::{MatchResult, SearchEngine, SearchRequest, SearchResult, search};
