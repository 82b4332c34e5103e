pub mod coordinate;
pub mod customer;
