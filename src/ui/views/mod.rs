pub mod success;
