//! Common library exports shared between the filtering engine and the backend.

extern crate serde;


pub mod question_record;
pub mod dataset;
pub mod search_query;
pub mod search_result;
pub mod search_const;
pub mod text_highlight;
pub mod facet_values;
pub mod predicates;
pub mod filter_engine;
