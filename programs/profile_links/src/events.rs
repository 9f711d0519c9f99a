use anchor_lang::prelude::*;

#[event]
pub struct ProfileCreated {
    pub profile: Pubkey,
    pub authority: Pubkey,
    pub display_name: String,
}

#[event]
pub struct LinkAdded {
    pub profile: Pubkey,
    pub authority: Pubkey,
    /// Position the new link landed at
    pub index: u8,
    pub total: u8,
}

#[event]
pub struct LinkUpdated {
    pub profile: Pubkey,
    pub authority: Pubkey,
    pub index: u8,
}

#[event]
pub struct LinkRemoved {
    pub profile: Pubkey,
    pub authority: Pubkey,
    pub index: u8,
    /// Links left after the removal
    pub total: u8,
}
