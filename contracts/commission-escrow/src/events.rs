use soroban_sdk::{contractevent, Address, Env, String};

#[contractevent(topics = ["created"])]
pub struct Created {
    #[topic]
    pub id: String,
    pub owner: Option<Address>,
}

#[contractevent(topics = ["deposit"])]
pub struct Deposited {
    #[topic]
    pub id: String,
    pub party: Address,
    pub amount: i128,
}

#[contractevent(topics = ["active"])]
pub struct Activated {
    #[topic]
    pub id: String,
    pub epoch: u64,
}

#[contractevent(topics = ["edited"])]
pub struct Edited {
    #[topic]
    pub id: String,
}

#[contractevent(topics = ["joined"])]
pub struct Joined {
    #[topic]
    pub id: String,
    pub counterparty: Address,
}

#[contractevent(topics = ["left"])]
pub struct Left {
    #[topic]
    pub id: String,
    pub counterparty: Address,
}

#[contractevent(topics = ["claimed"])]
pub struct Claimed {
    #[topic]
    pub id: String,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent(topics = ["consent"])]
pub struct Consent {
    #[topic]
    pub id: String,
    pub party: Address,
    pub consent: bool,
}

#[contractevent(topics = ["reverted"])]
pub struct Reverted {
    #[topic]
    pub id: String,
    pub to_owner: i128,
    pub to_counterparty: i128,
}

#[contractevent(topics = ["deleted"])]
pub struct Deleted {
    #[topic]
    pub id: String,
}

#[contractevent(topics = ["admin_set"])]
pub struct Corrected {
    #[topic]
    pub id: String,
}

#[contractevent(topics = ["reset"])]
pub struct Reset {
    pub removed: u32,
}

pub fn created(env: &Env, id: &String, owner: Option<Address>) {
    Created {
        id: id.clone(),
        owner,
    }
    .publish(env);
}

pub fn deposited(env: &Env, id: &String, party: &Address, amount: i128) {
    Deposited {
        id: id.clone(),
        party: party.clone(),
        amount,
    }
    .publish(env);
}

pub fn activated(env: &Env, id: &String, epoch: u64) {
    Activated {
        id: id.clone(),
        epoch,
    }
    .publish(env);
}

pub fn edited(env: &Env, id: &String) {
    Edited { id: id.clone() }.publish(env);
}

pub fn joined(env: &Env, id: &String, counterparty: &Address) {
    Joined {
        id: id.clone(),
        counterparty: counterparty.clone(),
    }
    .publish(env);
}

pub fn left(env: &Env, id: &String, counterparty: &Address) {
    Left {
        id: id.clone(),
        counterparty: counterparty.clone(),
    }
    .publish(env);
}

pub fn claimed(env: &Env, id: &String, recipient: &Address, amount: i128) {
    Claimed {
        id: id.clone(),
        recipient: recipient.clone(),
        amount,
    }
    .publish(env);
}

pub fn consent(env: &Env, id: &String, party: &Address, consent: bool) {
    Consent {
        id: id.clone(),
        party: party.clone(),
        consent,
    }
    .publish(env);
}

pub fn reverted(env: &Env, id: &String, to_owner: i128, to_counterparty: i128) {
    Reverted {
        id: id.clone(),
        to_owner,
        to_counterparty,
    }
    .publish(env);
}

pub fn deleted(env: &Env, id: &String) {
    Deleted { id: id.clone() }.publish(env);
}

pub fn corrected(env: &Env, id: &String) {
    Corrected { id: id.clone() }.publish(env);
}

pub fn reset(env: &Env, removed: u32) {
    Reset { removed }.publish(env);
}
