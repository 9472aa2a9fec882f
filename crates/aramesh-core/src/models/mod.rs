pub mod report;
pub mod result;
pub mod stress;
pub mod test;
