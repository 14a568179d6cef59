//! Domain Services - Derivations over repository output
//!
//! Everything here is a pure function of its inputs. Nothing holds on to a
//! repository or changes a collection it was handed.

pub mod roster;
pub mod schedule;
pub mod search;
