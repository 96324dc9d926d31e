#![no_std]

mod access;
mod admin;
mod cancel;
mod claim;
mod deposit;
mod escrow_contract;
mod events;
mod lifecycle;
mod storage;

pub mod entities;
pub mod errors;

pub use entities::{CommissionDetails, CommissionStatus, CommissionTerms, Parties, PartySlot, Transaction};
pub use errors::Error;
pub use escrow_contract::{CommissionEscrow, CommissionEscrowClient};
