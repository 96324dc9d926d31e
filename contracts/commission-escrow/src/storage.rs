use crate::entities::{DataKey, Parties, Transaction};
use crate::errors::Error;
use soroban_sdk::{Env, String, Vec};

pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Most ids a single `ids` call returns.
pub const MAX_PAGE: u32 = 50;
/// Longest caller-chosen id, in bytes.
pub const MAX_ID_LEN: u32 = 64;

const GENERATED_ID_PREFIX: &[u8] = b"commission-";

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

fn generation(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Generation)
        .unwrap_or(0)
}

/// Party and transaction records, always written and removed together.
///
/// Every key carries the current generation. A reset moves to the next
/// generation, which leaves the old records unreachable until they expire.
/// The id index is one small entry per position, so no single write grows
/// with the number of commissions.
pub struct RecordStore;

impl RecordStore {
    pub fn exists(env: &Env, id: &String) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Transaction(generation(env), id.clone()))
    }

    pub fn create(
        env: &Env,
        id: &String,
        parties: &Parties,
        transaction: &Transaction,
    ) -> Result<(), Error> {
        if Self::exists(env, id) {
            return Err(Error::AlreadyExists);
        }
        Self::put_parties(env, id, parties);
        Self::put(env, id, transaction);
        Self::push_index(env, id)
    }

    pub fn get(env: &Env, id: &String) -> Result<Transaction, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Transaction(generation(env), id.clone()))
            .ok_or(Error::NotFound)
    }

    pub fn parties(env: &Env, id: &String) -> Result<Parties, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Parties(generation(env), id.clone()))
            .ok_or(Error::NotFound)
    }

    /// Loads both halves of a record.
    pub fn load(env: &Env, id: &String) -> Result<(Parties, Transaction), Error> {
        Ok((Self::parties(env, id)?, Self::get(env, id)?))
    }

    pub fn put(env: &Env, id: &String, transaction: &Transaction) {
        let key = DataKey::Transaction(generation(env), id.clone());
        env.storage().persistent().set(&key, transaction);
        bump_record(env, &key);
    }

    pub fn put_parties(env: &Env, id: &String, parties: &Parties) {
        let key = DataKey::Parties(generation(env), id.clone());
        env.storage().persistent().set(&key, parties);
        bump_record(env, &key);
    }

    pub fn update<F>(env: &Env, id: &String, mutator: F) -> Result<Transaction, Error>
    where
        F: FnOnce(&mut Transaction),
    {
        let mut transaction = Self::get(env, id)?;
        mutator(&mut transaction);
        Self::put(env, id, &transaction);
        Ok(transaction)
    }

    pub fn update_parties<F>(env: &Env, id: &String, mutator: F) -> Result<Parties, Error>
    where
        F: FnOnce(&mut Parties),
    {
        let mut parties = Self::parties(env, id)?;
        mutator(&mut parties);
        Self::put_parties(env, id, &parties);
        Ok(parties)
    }

    pub fn delete(env: &Env, id: &String) -> Result<(), Error> {
        if !Self::exists(env, id) {
            return Err(Error::NotFound);
        }
        let generation = generation(env);
        let storage = env.storage().persistent();
        storage.remove(&DataKey::Transaction(generation, id.clone()));
        storage.remove(&DataKey::Parties(generation, id.clone()));
        Self::remove_index(env, generation, id);
        Ok(())
    }

    /// Starts a new, empty generation. Returns how many records the old one held.
    pub fn reset_all(env: &Env) -> Result<u32, Error> {
        let current = generation(env);
        let removed = Self::count(env);
        let next = current.checked_add(1).ok_or(Error::Overflow)?;
        env.storage().instance().set(&DataKey::Generation, &next);
        Ok(removed)
    }

    pub fn count(env: &Env) -> u32 {
        index_len(env, generation(env))
    }

    /// Up to `limit` ids (capped at [`MAX_PAGE`]) starting at position `start`.
    pub fn ids(env: &Env, start: u32, limit: u32) -> Vec<String> {
        let generation = generation(env);
        let end = start
            .saturating_add(limit.min(MAX_PAGE))
            .min(index_len(env, generation));

        let mut page = Vec::new(env);
        for position in start..end {
            let id: Option<String> = env
                .storage()
                .persistent()
                .get(&DataKey::IndexSlot(generation, position));
            if let Some(id) = id {
                page.push_back(id);
            }
        }
        page
    }

    /// Next free `commission-<n>` identifier.
    pub fn next_id(env: &Env) -> Result<String, Error> {
        let mut counter: u64 = env
            .storage()
            .instance()
            .get(&DataKey::TransactionCounter)
            .unwrap_or(0);

        loop {
            counter = counter.checked_add(1).ok_or(Error::Overflow)?;
            let id = generated_id(env, counter);
            if !Self::exists(env, &id) {
                env.storage()
                    .instance()
                    .set(&DataKey::TransactionCounter, &counter);
                return Ok(id);
            }
        }
    }

    fn push_index(env: &Env, id: &String) -> Result<(), Error> {
        let generation = generation(env);
        let position = index_len(env, generation);
        let len = position.checked_add(1).ok_or(Error::Overflow)?;

        set_slot(env, generation, position, id);
        set_index_len(env, generation, len);
        Ok(())
    }

    /// Swap-removes `id`: the last slot moves into the freed position.
    fn remove_index(env: &Env, generation: u32, id: &String) {
        let storage = env.storage().persistent();
        let position_key = DataKey::IndexPosition(generation, id.clone());
        let Some(position) = storage.get::<_, u32>(&position_key) else {
            return;
        };
        let Some(last) = index_len(env, generation).checked_sub(1) else {
            return;
        };

        if position != last {
            let moved: Option<String> = storage.get(&DataKey::IndexSlot(generation, last));
            if let Some(moved) = moved {
                set_slot(env, generation, position, &moved);
            }
        }
        storage.remove(&DataKey::IndexSlot(generation, last));
        storage.remove(&position_key);
        set_index_len(env, generation, last);
    }
}

fn index_len(env: &Env, generation: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::IndexLen(generation))
        .unwrap_or(0)
}

fn set_index_len(env: &Env, generation: u32, len: u32) {
    let key = DataKey::IndexLen(generation);
    env.storage().persistent().set(&key, &len);
    bump_record(env, &key);
}

fn set_slot(env: &Env, generation: u32, position: u32, id: &String) {
    let slot = DataKey::IndexSlot(generation, position);
    env.storage().persistent().set(&slot, id);
    bump_record(env, &slot);

    let back = DataKey::IndexPosition(generation, id.clone());
    env.storage().persistent().set(&back, &position);
    bump_record(env, &back);
}

fn generated_id(env: &Env, counter: u64) -> String {
    let mut buf = [0u8; 32];
    buf[..GENERATED_ID_PREFIX.len()].copy_from_slice(GENERATED_ID_PREFIX);

    let mut digits = [0u8; 20];
    let mut len = 0;
    let mut rest = counter;
    loop {
        digits[len] = b'0' + (rest % 10) as u8;
        len += 1;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }

    let mut at = GENERATED_ID_PREFIX.len();
    for digit in digits[..len].iter().rev() {
        buf[at] = *digit;
        at += 1;
    }
    String::from_bytes(env, &buf[..at])
}
