pub mod deadlines;
pub mod notices;
