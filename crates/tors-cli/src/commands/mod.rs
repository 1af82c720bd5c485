pub mod complex;
pub mod derived;
pub mod heart;
pub mod kappa;
pub mod labels;
pub mod pairs;
pub mod summary;
