pub mod category;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod tally;
