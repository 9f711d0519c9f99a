use solana_program::pubkey::Pubkey;

use crate::constants::SEED_PROFILE;

/// Address of the profile owned by `authority`, with its canonical bump.
pub fn profile_address(authority: &Pubkey) -> (Pubkey, u8) {
    profile_address_with_program(authority, &crate::ID)
}

pub fn profile_address_with_program(authority: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_PROFILE, authority.as_ref()], program_id)
}
