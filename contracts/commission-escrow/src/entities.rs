use soroban_sdk::{contracttype, Address, Bytes, BytesN, Env, String};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CommissionStatus {
    Reverted,
    Pending,
    Active,
    Completed,
}

impl CommissionStatus {
    /// Signed wire code: `-1` reverted, `0` pending, `1` active, `2` completed.
    pub fn code(self) -> i32 {
        match self {
            Self::Reverted => -1,
            Self::Pending => 0,
            Self::Active => 1,
            Self::Completed => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Self::Reverted),
            0 => Some(Self::Pending),
            1 => Some(Self::Active),
            2 => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Reverted)
    }
}

/// A participant slot that may not have been filled yet.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PartySlot {
    Unset,
    Set(Address),
}

impl PartySlot {
    pub fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    pub fn is(&self, address: &Address) -> bool {
        match self {
            Self::Set(current) => current == address,
            Self::Unset => false,
        }
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            Self::Set(address) => Some(address.clone()),
            Self::Unset => None,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parties {
    pub owner: PartySlot,
    pub counterparty: PartySlot,
}

impl Parties {
    pub fn open() -> Self {
        Self {
            owner: PartySlot::Unset,
            counterparty: PartySlot::Unset,
        }
    }

    pub fn posted_by(owner: Address) -> Self {
        Self {
            owner: PartySlot::Set(owner),
            counterparty: PartySlot::Unset,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    /// Amount the owner locks.
    pub offer: i128,
    /// Amount the counterparty locks.
    pub fee: i128,
    pub balance_owner: i128,
    pub balance_counterparty: i128,
    /// Claim deadline once the commission is active.
    pub epoch: u64,
    /// Seconds between activation and the deadline.
    pub duration: u64,
    pub hashed_secret: Option<BytesN<32>>,
    pub owner_has_withdrawn: bool,
    pub counterparty_has_withdrawn: bool,
    pub description: String,
    pub title: String,
    pub status: CommissionStatus,
}

impl Transaction {
    pub fn new(
        offer: i128,
        fee: i128,
        duration: u64,
        hashed_secret: Option<BytesN<32>>,
        description: String,
        title: String,
    ) -> Self {
        Self {
            offer,
            fee,
            balance_owner: 0,
            balance_counterparty: 0,
            epoch: 0,
            duration,
            hashed_secret,
            owner_has_withdrawn: false,
            counterparty_has_withdrawn: false,
            description,
            title,
            status: CommissionStatus::Pending,
        }
    }

    /// An empty slot opened by the administrator.
    pub fn blank(env: &Env) -> Self {
        Self::new(
            0,
            0,
            0,
            None,
            String::from_str(env, ""),
            String::from_str(env, ""),
        )
    }

    pub fn both_deposited(&self) -> bool {
        self.balance_owner != 0 && self.balance_counterparty != 0
    }

    /// Both sides locked something, and exactly the agreed amounts.
    pub fn fully_funded(&self) -> bool {
        self.both_deposited()
            && self.balance_owner == self.offer
            && self.balance_counterparty == self.fee
    }
}

/// What an owner fixes when posting a commission.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommissionTerms {
    pub offer: i128,
    pub fee: i128,
    pub duration: u64,
    /// Plaintext; only its hash is stored.
    pub secret: Bytes,
    pub description: String,
    pub title: String,
}

/// Everything the administrator overwrites in one correction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommissionDetails {
    pub owner: Address,
    pub counterparty: Address,
    pub duration: u64,
    pub offer: i128,
    pub fee: i128,
    pub secret: Bytes,
    pub description: String,
    pub title: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Token,
    TransactionCounter,
    /// Bumped by every reset; scopes all keys below.
    Generation,
    IndexLen(u32),
    IndexSlot(u32, u32),
    IndexPosition(u32, String),
    Parties(u32, String),
    Transaction(u32, String),
}
