pub mod neighborhood;
