//! Game implementations.

pub mod shogi;
