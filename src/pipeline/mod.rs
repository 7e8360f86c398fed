mod report;
mod run;

pub use run::{classify_peers, run, FilterOptions, InputError};
