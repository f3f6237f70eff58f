#![no_std]

//! Data model shared by the emotion oracle, validation and storage contracts,
//! plus the cross-contract clients the downstream contracts read through.

mod interface;
mod types;

pub use interface::{OracleReader, OracleReaderClient, ValidationReader, ValidationReaderClient};
pub use types::*;
