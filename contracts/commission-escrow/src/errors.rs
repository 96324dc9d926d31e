use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotFound = 3,
    AlreadyExists = 4,
    Unauthorized = 5,
    /// Status precondition not met.
    InvalidState = 6,
    /// Deposit differs from the agreed amount, or the escrow is not funded.
    AmountMismatch = 7,
    InvalidAmount = 8,
    AlreadyDeposited = 9,
    AlreadySet = 10,
    SecretMismatch = 11,
    /// Claim attempted outside its time window.
    DeadlineViolation = 12,
    /// The claimant (or the counterparty) asked to cancel.
    CancellationPending = 13,
    ConsentRequired = 14,
    PartyNotSet = 15,
    Overflow = 16,
    InvalidStatus = 17,
    /// Caller-chosen id is empty or too long.
    InvalidId = 18,
}
