//! Role predicates. None of these touch records; callers load the
//! [`Parties`] they need and check before mutating anything.

use crate::entities::{DataKey, Parties};
use crate::errors::Error;
use soroban_sdk::{Address, Env};

pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn is_admin(env: &Env, caller: &Address) -> Result<bool, Error> {
    Ok(admin(env)? == *caller)
}

pub fn is_owner(parties: &Parties, caller: &Address) -> bool {
    parties.owner.is(caller)
}

pub fn is_counterparty(parties: &Parties, caller: &Address) -> bool {
    parties.counterparty.is(caller)
}

pub fn is_unset_owner(parties: &Parties) -> bool {
    !parties.owner.is_set()
}

pub fn is_unset_counterparty(parties: &Parties) -> bool {
    !parties.counterparty.is_set()
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    if !is_admin(env, caller)? {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_owner(parties: &Parties, caller: &Address) -> Result<(), Error> {
    if !is_owner(parties, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_counterparty(parties: &Parties, caller: &Address) -> Result<(), Error> {
    if !is_counterparty(parties, caller) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PartySlot;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn party_predicates() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let stranger = Address::generate(&env);

        let parties = Parties::posted_by(owner.clone());
        assert!(is_owner(&parties, &owner));
        assert!(!is_owner(&parties, &stranger));
        assert!(!is_counterparty(&parties, &owner));
        assert!(!is_unset_owner(&parties));
        assert!(is_unset_counterparty(&parties));
        assert_eq!(require_owner(&parties, &stranger), Err(Error::Unauthorized));

        let parties = Parties {
            owner: PartySlot::Unset,
            counterparty: PartySlot::Set(stranger.clone()),
        };
        assert!(is_unset_owner(&parties));
        assert!(is_counterparty(&parties, &stranger));
        assert_eq!(require_counterparty(&parties, &stranger), Ok(()));
        assert_eq!(require_counterparty(&parties, &owner), Err(Error::Unauthorized));
    }
}
